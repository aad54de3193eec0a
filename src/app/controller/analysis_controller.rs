use std::sync::Arc;
use anyhow::Error;

use crate::analysis::data::mock::MockMarketData;
use crate::analysis::evaluation::{EvaluationResult, Language};
use crate::analysis::llm::models::LLMModel;
use crate::analysis::news::models::NewsArticle;
use crate::analysis::utils::options::{OptionSet, DEFAULT_COMPANY, INDUSTRIES, INVESTMENT_HORIZONS, RISK_PROFILES, TIMEFRAMES};
use crate::app::services::report_service::{AnalysisRequest, ReportBundle};
use crate::app::services::service::{FinancialAnalysisServices, LanguageInfo};

/// Raw request fields as received; anything missing is filled with a default.
/// A company given as blank text stays blank and is rejected downstream.
#[derive(Debug, Clone, Default)]
pub struct AnalysisParameters {
  pub company: Option<String>,
  pub industry: Option<String>,
  pub timeframe: Option<String>,
  pub risk_profile: Option<String>,
  pub investment_horizon: Option<String>,
  pub language: Option<String>,
}

impl AnalysisParameters {
  pub fn resolve(&self) -> AnalysisRequest {
    AnalysisRequest {
      company: self.company.as_deref().map(str::trim).unwrap_or(DEFAULT_COMPANY).to_string(),
      industry: INDUSTRIES.resolve(self.industry.as_deref()),
      timeframe: TIMEFRAMES.resolve(self.timeframe.as_deref()),
      risk_profile: RISK_PROFILES.resolve(self.risk_profile.as_deref()),
      investment_horizon: INVESTMENT_HORIZONS.resolve(self.investment_horizon.as_deref()),
      language: Language::from_tag(self.language.as_deref().unwrap_or_default()),
    }
  }
}

pub struct AnalysisController {
  services : Arc<FinancialAnalysisServices>
}

impl AnalysisController {
  pub fn new(services: Arc<FinancialAnalysisServices>) -> Self {
    AnalysisController { services }
  }

  pub fn get_languages(&self) -> Vec<LanguageInfo> {
    self.services.get_languages()
  }

  pub fn get_options(&self) -> Vec<OptionSet> {
    self.services.get_options()
  }

  pub fn get_available_models(&self) -> Vec<LLMModel> {
    self.services.get_available_models()
  }

  pub fn get_mock_data(&self, company: Option<&str>) -> MockMarketData {
    self.services.get_mock_data(company)
  }

  pub fn evaluate(&self, text: &str, language: Option<&str>) -> EvaluationResult {
    self.services.evaluate(text, language)
  }

  pub async fn get_news(&self, parameters: AnalysisParameters) -> Vec<NewsArticle> {
    self.services.get_news(&parameters.resolve()).await
  }

  pub async fn generate_reports(&self, parameters: AnalysisParameters) -> Result<ReportBundle, Error> {
    let request: AnalysisRequest = parameters.resolve();

    match self.services.generate_reports(request).await {
      Ok(bundle) => {
        if !bundle.success {
          log::warn!("Analysis finished with errors: {}", bundle.error.as_deref().unwrap_or("unknown error"));
        }
        Ok(bundle)
      }
      Err(e) => {
        log::error!("Cannot generate analysis reports with error: {}", e);
        Err(e)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parameters_resolve_defaults() {
    let request = AnalysisParameters::default().resolve();

    assert_eq!(request.company, "Apple");
    assert_eq!(request.industry, "Technology");
    assert_eq!(request.timeframe, "6 months");
    assert_eq!(request.risk_profile, "Moderate");
    assert_eq!(request.investment_horizon, "Medium-term (3-5 years)");
    assert_eq!(request.language, Language::English);
  }

  #[test]
  fn test_parameters_resolve_given_values() {
    let parameters = AnalysisParameters {
      company: Some(" Tesla ".to_string()),
      timeframe: Some("5 years".to_string()),
      language: Some("marathi".to_string()),
      ..Default::default()
    };
    let request = parameters.resolve();

    assert_eq!(request.company, "Tesla");
    assert_eq!(request.timeframe, "5 years");
    assert_eq!(request.language, Language::Marathi);
  }

  #[test]
  fn test_parameters_keep_blank_company() {
    let parameters = AnalysisParameters { company: Some("  ".to_string()), ..Default::default() };
    assert_eq!(parameters.resolve().company, "");
  }
}
