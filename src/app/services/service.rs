use super::report_service::{AnalysisRequest, ReportBundle, ReportService};
use crate::analysis::data::mock::{generate_mock_data, MockMarketData};
use crate::analysis::evaluation::{EvaluationParser, EvaluationResult, Language};
use crate::analysis::llm::models::{get_available_models, LLMModel};
use crate::analysis::news::models::NewsArticle;
use crate::analysis::prompts::{prompts_for, UiTranslations};
use crate::analysis::utils::options::{get_option_sets, OptionSet, DEFAULT_COMPANY};

use anyhow::Error;
use serde::Serialize;
use std::fmt;
use std::result::Result;

/// A request the caller must correct before it can be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRequest(pub String);

impl fmt::Display for InvalidRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::error::Error for InvalidRequest {}


#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
  pub name: &'static str,
  pub code: &'static str,
  pub ui: UiTranslations,
}

pub struct FinancialAnalysisServices {
  report_service : ReportService
}

impl FinancialAnalysisServices {

  pub fn new(report_service: ReportService) -> Self {
    FinancialAnalysisServices { report_service }
  }

  pub fn get_languages(&self) -> Vec<LanguageInfo> {
    Language::all().iter().map(|language| LanguageInfo {
      name: language.as_str(),
      code: language.code(),
      ui: prompts_for(*language).ui.clone(),
    }).collect()
  }

  pub fn get_options(&self) -> Vec<OptionSet> {
    get_option_sets()
  }

  pub fn get_available_models(&self) -> Vec<LLMModel> {
    get_available_models().to_vec()
  }

  pub fn get_mock_data(&self, company: Option<&str>) -> MockMarketData {
    let company: &str = company.map(str::trim).filter(|c| !c.is_empty()).unwrap_or(DEFAULT_COMPANY);
    generate_mock_data(company)
  }

  pub fn evaluate(&self, text: &str, language: Option<&str>) -> EvaluationResult {
    EvaluationParser::parse(text, language.unwrap_or_default())
  }

  pub async fn get_news(&self, request: &AnalysisRequest) -> Vec<NewsArticle> {
    if request.company.trim().is_empty() {
      return Vec::new();
    }
    self.report_service.fetch_news(request).await
  }

  pub async fn generate_reports(&self, request: AnalysisRequest) -> Result<ReportBundle, Error> {
    if request.company.trim().is_empty() {
      return Err(Error::new(InvalidRequest("Company name must not be empty".to_string())));
    }

    log::info!("Generating complete analysis for {} ({}, {})", request.company, request.industry, request.language);
    Ok(self.report_service.generate_all_reports(&request).await)
  }
}
