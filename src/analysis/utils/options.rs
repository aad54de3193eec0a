use serde::Serialize;

/// One closed vocabulary a request field is chosen from.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSet {
  pub field: &'static str,
  pub choices: &'static [&'static str],
  pub default: &'static str,
}

impl OptionSet {
  pub fn contains(&self, value: &str) -> bool {
    self.choices.iter().any(|choice| choice.eq_ignore_ascii_case(value.trim()))
  }

  /// The value to use for a request field: the default when blank, otherwise
  /// the value itself (free text outside the list is allowed but logged).
  pub fn resolve(&self, value: Option<&str>) -> String {
    match value.map(str::trim) {
      None | Some("") => self.default.to_string(),
      Some(value) => {
        if !self.contains(value) {
          log::warn!("{} {:?} is not one of {:?}; passing it through", self.field, value, self.choices);
        }
        value.to_string()
      }
    }
  }
}

pub const INDUSTRIES: OptionSet = OptionSet {
  field: "industry",
  choices: &["Technology", "Healthcare", "Finance", "Retail", "Manufacturing"],
  default: "Technology",
};

pub const TIMEFRAMES: OptionSet = OptionSet {
  field: "timeframe",
  choices: &["6 months", "1 year", "2 years", "5 years"],
  default: "6 months",
};

pub const RISK_PROFILES: OptionSet = OptionSet {
  field: "risk_profile",
  choices: &["Conservative", "Moderate", "Aggressive"],
  default: "Moderate",
};

pub const INVESTMENT_HORIZONS: OptionSet = OptionSet {
  field: "investment_horizon",
  choices: &["Short-term (1-2 years)", "Medium-term (3-5 years)", "Long-term (5+ years)"],
  default: "Medium-term (3-5 years)",
};

pub const DEFAULT_COMPANY: &str = "Apple";

pub fn get_option_sets() -> Vec<OptionSet> {
  vec![INDUSTRIES, TIMEFRAMES, RISK_PROFILES, INVESTMENT_HORIZONS]
}
