use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{Context, Error, Result};
use serde::{Serialize, Deserialize};

use crate::analysis::evaluation::{EvaluationParser, EvaluationResult, Language};
use crate::analysis::llm::model_provider::{LLMChatter, LLMModelConfig};
use crate::analysis::llm::models::generate_response;
use crate::analysis::news::provider::{format_news_for_prompt, NewsProvider};
use crate::analysis::news::models::NewsArticle;
use crate::analysis::prompts::{prompts_for, LanguagePrompts, PromptTemplate};

pub const DEFAULT_MARKET_CAP: f64 = 100.0;
pub const DEFAULT_GEOGRAPHIC_FOCUS: &str = "North America, Europe";
pub const DEFAULT_METRICS: &str = "Revenue, EBITDA, Net Income, Operating Cash Flow";
pub const DEFAULT_HISTORICAL_RANGE: &str = "5 years";
pub const DEFAULT_CONFIDENCE_LEVEL: &str = "95%";
pub const DEFAULT_PORTFOLIO_CONTEXT: &str = "Diversified equity portfolio";
pub const DEFAULT_MARKET_REGIME: &str = "Neutral";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
  MarketTrends,
  FinancialProjections,
  InvestmentRecommendations,
}

impl ReportKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      ReportKind::MarketTrends => "market trends",
      ReportKind::FinancialProjections => "financial projections",
      ReportKind::InvestmentRecommendations => "investment recommendations",
    }
  }

  fn template(&self, prompts: &'static LanguagePrompts) -> &'static PromptTemplate {
    match self {
      ReportKind::MarketTrends => &prompts.market_trends,
      ReportKind::FinancialProjections => &prompts.financial_projections,
      ReportKind::InvestmentRecommendations => &prompts.investment_recommendations,
    }
  }
}

/// Fully resolved analysis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
  pub company: String,
  pub industry: String,
  pub timeframe: String,
  pub risk_profile: String,
  pub investment_horizon: String,
  pub language: Language,
}

impl AnalysisRequest {
  fn template_variables(&self) -> HashMap<&'static str, String> {
    HashMap::from([
      ("company", self.company.clone()),
      ("industry", self.industry.clone()),
      ("timeframe", self.timeframe.clone()),
      ("risk_profile", self.risk_profile.clone()),
      ("investment_horizon", self.investment_horizon.clone()),
      ("market_cap", format!("{:.1}", DEFAULT_MARKET_CAP)),
      ("geographic_focus", DEFAULT_GEOGRAPHIC_FOCUS.to_string()),
      ("metrics", DEFAULT_METRICS.to_string()),
      ("historical_range", DEFAULT_HISTORICAL_RANGE.to_string()),
      ("confidence_level", DEFAULT_CONFIDENCE_LEVEL.to_string()),
      ("portfolio_context", DEFAULT_PORTFOLIO_CONTEXT.to_string()),
      ("market_regime", DEFAULT_MARKET_REGIME.to_string()),
    ])
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
  pub report: String,
  pub evaluation: EvaluationResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  pub market_trends: Option<AnalysisReport>,
  pub financial_projections: Option<AnalysisReport>,
  pub investment_recommendations: Option<AnalysisReport>,
  pub news: Vec<NewsArticle>,
}

pub struct ReportService {
  chatter: Arc<dyn LLMChatter>,
  model_config: LLMModelConfig,
  news_provider: Option<Arc<dyn NewsProvider>>,
}

impl ReportService {

  pub fn new(chatter: Arc<dyn LLMChatter>, model_config: LLMModelConfig, news_provider: Option<Arc<dyn NewsProvider>>) -> Self {
    ReportService { chatter, model_config, news_provider }
  }

  pub async fn fetch_news(&self, request: &AnalysisRequest) -> Vec<NewsArticle> {
    match &self.news_provider {
      Some(news) => news.fetch_company_news(&request.company, &request.timeframe, request.language).await,
      None => Vec::new(),
    }
  }

  pub async fn generate_market_analysis(&self, request: &AnalysisRequest, news: &[NewsArticle]) -> Result<AnalysisReport, Error> {
    self.generate_report(ReportKind::MarketTrends, request, Some(news)).await
  }

  pub async fn generate_financial_forecast(&self, request: &AnalysisRequest) -> Result<AnalysisReport, Error> {
    self.generate_report(ReportKind::FinancialProjections, request, None).await
  }

  pub async fn generate_investment_advice(&self, request: &AnalysisRequest) -> Result<AnalysisReport, Error> {
    self.generate_report(ReportKind::InvestmentRecommendations, request, None).await
  }

  async fn generate_report(&self, kind: ReportKind, request: &AnalysisRequest, news: Option<&[NewsArticle]>) -> Result<AnalysisReport, Error> {
    let prompts: &'static LanguagePrompts = prompts_for(request.language);

    let mut prompt: String = kind.template(prompts).format(&request.template_variables())
      .with_context(|| format!("Failed to render {} prompt", kind.as_str()))?;
    if let Some(news) = news.filter(|news| !news.is_empty()) {
      prompt.push_str("\n\n");
      prompt.push_str(&format_news_for_prompt(news));
    }

    log::info!("[{}] ({}) Calling LLM for {} report...", request.company, request.language, kind.as_str());
    let report: String = generate_response(self.chatter.as_ref(), &self.model_config, prompts.system_context, &prompt).await
      .with_context(|| format!("Failed to generate {} report", kind.as_str()))?;

    let evaluation: EvaluationResult = self.evaluate_report(&report, request.language).await;

    Ok(AnalysisReport { report, evaluation })
  }

  /// Scores a report with the language's evaluation template. A failed call
  /// yields an empty evaluation rather than failing the report.
  pub async fn evaluate_report(&self, report: &str, language: Language) -> EvaluationResult {
    let prompts: &'static LanguagePrompts = prompts_for(language);

    match generate_response(self.chatter.as_ref(), &self.model_config, prompts.system_context, &prompts.evaluation_prompt(report)).await {
      Ok(evaluation_text) => EvaluationParser::parse_for(&evaluation_text, language),
      Err(e) => {
        log::warn!("Evaluation call failed, returning empty evaluation: {:#}", e);
        EvaluationResult::default()
      }
    }
  }

  /// Runs the three reports one after another; the first failure ends the run.
  pub async fn generate_all_reports(&self, request: &AnalysisRequest) -> ReportBundle {
    let ui = &prompts_for(request.language).ui;
    let mut bundle = ReportBundle::default();
    bundle.news = self.fetch_news(request).await;

    let result = async {
      bundle.market_trends = Some(self.generate_market_analysis(request, &bundle.news).await?);
      bundle.financial_projections = Some(self.generate_financial_forecast(request).await?);
      bundle.investment_recommendations = Some(self.generate_investment_advice(request).await?);
      Ok::<(), Error>(())
    }.await;

    match result {
      Ok(()) => {
        bundle.success = true;
        log::info!("[{}] {}", request.company, ui.success);
      }
      Err(e) => {
        log::error!("[{}] Report generation failed: {:#}", request.company, e);
        bundle.success = false;
        bundle.error = Some(ui.format_error(&format!("{:#}", e)));
      }
    }

    return bundle;
  }
}
