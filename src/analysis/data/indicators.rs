use serde::{Serialize, Deserialize};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
pub const RSI_PERIOD: usize = 14;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMetrics {
  pub rsi: f64,
  pub sma_50: f64,
  pub sma_200: f64,
  pub volatility: f64,
}

impl StockMetrics {
  pub fn from_closes(closes: &[f64]) -> Self {
    StockMetrics {
      rsi: rsi(closes, RSI_PERIOD),
      sma_50: simple_moving_average(closes, 50),
      sma_200: simple_moving_average(closes, 200),
      volatility: annualized_volatility(closes),
    }
  }
}

fn mean(values: &[f64]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of the last `window` closes, or of every close when the history is shorter.
pub fn simple_moving_average(closes: &[f64], window: usize) -> f64 {
  if window == 0 || closes.len() < window {
    return mean(closes);
  }
  mean(&closes[closes.len() - window..])
}

/// Relative strength index over the last `period` price changes (simple averages).
pub fn rsi(closes: &[f64], period: usize) -> f64 {
  if period == 0 || closes.len() <= period {
    return 50.0;
  }

  let recent = &closes[closes.len() - period - 1..];
  let (mut gains, mut losses) = (0.0_f64, 0.0_f64);
  for pair in recent.windows(2) {
    let change = pair[1] - pair[0];
    if change > 0.0 {
      gains += change;
    } else {
      losses -= change;
    }
  }

  let avg_gain = gains / period as f64;
  let avg_loss = losses / period as f64;

  if avg_loss == 0.0 {
    return if avg_gain == 0.0 { 50.0 } else { 100.0 };
  }

  let relative_strength = avg_gain / avg_loss;
  100.0 - 100.0 / (1.0 + relative_strength)
}

/// Sample standard deviation of daily returns, scaled to a year.
pub fn annualized_volatility(closes: &[f64]) -> f64 {
  let returns: Vec<f64> = closes
    .windows(2)
    .filter(|pair| pair[0] != 0.0)
    .map(|pair| pair[1] / pair[0] - 1.0)
    .collect();

  if returns.len() < 2 {
    return 0.0;
  }

  let average = mean(&returns);
  let variance = returns.iter().map(|r| (r - average).powi(2)).sum::<f64>() / (returns.len() - 1) as f64;
  variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt()
}
