use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::analysis::data::indicators::StockMetrics;

pub const MOCK_SEED: u64 = 42;
pub const MOCK_TRADING_DAYS: usize = 252;
pub const MOCK_MONTHS: u32 = 12;
pub const MOCK_SHARES_OUTSTANDING: f64 = 1_000_000_000.0;
const STARTING_PRICE: f64 = 150.0;
const PRICE_FLOOR: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
  pub date: NaiveDate,
  pub close: f64,
  pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPoint {
  pub date: NaiveDate,
  pub revenue: f64,
  pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
  pub current_price: f64,
  pub market_cap: f64,
  pub volume: u64,
  pub metrics: StockMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockMarketData {
  pub company: String,
  pub price_chart_title: String,
  pub financial_chart_title: String,
  pub historical_data: Vec<PricePoint>,
  pub financial_data: Vec<FinancialPoint>,
  pub stock: StockSnapshot,
}

// Box-Muller transform over the seeded generator.
fn sample_normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
  let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
  let u2: f64 = rng.gen();
  mean + std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

fn business_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
  let mut days: Vec<NaiveDate> = Vec::with_capacity(count);
  let mut day = start;
  while days.len() < count {
    if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
      days.push(day);
    }
    day += Duration::days(1);
  }
  return days;
}

fn month_ends(year: i32, months: u32) -> Vec<NaiveDate> {
  (0..months)
    .filter_map(|offset| {
      let month0 = offset % 12;
      let year = year + (offset / 12) as i32;
      let (next_year, next_month) = if month0 == 11 { (year + 1, 1) } else { (year, month0 + 2) };
      NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|first| first - Duration::days(1))
    })
    .collect()
}

fn mock_start_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Deterministic chart data for a company; every call returns the same series.
pub fn generate_mock_data(company: &str) -> MockMarketData {
  let mut rng: StdRng = StdRng::seed_from_u64(MOCK_SEED);
  let start = mock_start_date();

  let mut close: f64 = STARTING_PRICE;
  let historical_data: Vec<PricePoint> = business_days(start, MOCK_TRADING_DAYS)
    .into_iter()
    .map(|date| {
      close = (close * (1.0 + sample_normal(&mut rng, 0.0005, 0.015))).max(PRICE_FLOOR);
      let volume = sample_normal(&mut rng, 1_000_000.0, 200_000.0).max(10_000.0).round() as u64;
      PricePoint { date, close, volume }
    })
    .collect();

  let (mut revenue, mut profit) = (0.0_f64, 0.0_f64);
  let financial_data: Vec<FinancialPoint> = month_ends(start.year(), MOCK_MONTHS)
    .into_iter()
    .map(|date| {
      revenue += sample_normal(&mut rng, 1_000_000.0, 100_000.0);
      profit += sample_normal(&mut rng, 200_000.0, 50_000.0);
      FinancialPoint { date, revenue, profit }
    })
    .collect();

  let closes: Vec<f64> = historical_data.iter().map(|point| point.close).collect();
  let (current_price, volume) = historical_data.last().map(|last| (last.close, last.volume)).unwrap_or((STARTING_PRICE, 0));

  let stock = StockSnapshot {
    current_price,
    market_cap: current_price * MOCK_SHARES_OUTSTANDING,
    volume,
    metrics: StockMetrics::from_closes(&closes),
  };

  log::debug!("Generated mock market data for {}: {} prices, {} months", company, historical_data.len(), financial_data.len());

  MockMarketData {
    company: company.to_string(),
    price_chart_title: format!("{} Stock Price and Volume", company),
    financial_chart_title: format!("{} Financial Projections", company),
    historical_data,
    financial_data,
    stock,
  }
}
