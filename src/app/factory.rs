use actix_web::{web, App};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::analysis::llm::model_provider::{ChatMessage, LLMChatter, LLMModelConfig, LLMResponse};
use crate::analysis::llm::models::get_model;
use crate::analysis::news::brave::BraveNewsService;
use crate::analysis::news::duckduckgo::DuckDuckGoNewsService;
use crate::analysis::news::provider::NewsProvider;
use crate::app::config::Config;
use crate::app::routes::routes::Routes;

use super::controller::analysis_controller::AnalysisController;
use super::services::report_service::ReportService;
use super::services::service::FinancialAnalysisServices;

/// Stands in for the provider when no API key is configured, so the
/// server still starts and every report call reports the missing key.
struct UnconfiguredChatter {
  reason: String,
}

#[async_trait]
impl LLMChatter for UnconfiguredChatter {
  async fn chat(&self, _messages: Vec<ChatMessage>, _config: &LLMModelConfig) -> Result<LLMResponse> {
    Err(anyhow!("{}", self.reason))
  }
}

/// Brave Search when a key is configured, otherwise the keyless DuckDuckGo API.
pub fn build_news_provider(app_config: &Config) -> Option<Arc<dyn NewsProvider>> {
  if !app_config.news_enabled {
    log::info!("News lookup disabled");
    return None;
  }

  let provider: Arc<dyn NewsProvider> = match app_config.brave_api_key.as_deref() {
    Some(key) => Arc::new(BraveNewsService::new(key, &app_config.brave_base_url)),
    None => Arc::new(DuckDuckGoNewsService::new(&app_config.duckduckgo_base_url)),
  };
  log::info!("Using {} for company news", provider.name());
  Some(provider)
}

#[derive(Clone)]
pub struct AppState {
  pub analysis_controller: Arc<AnalysisController>
}

impl AppState {

  pub fn new(app_config: &Config) -> Self {
    let model_config: LLMModelConfig = app_config.llm_model_config();
    let chatter: Arc<dyn LLMChatter> = match get_model(&model_config) {
      Ok(model) => Arc::from(model),
      Err(e) => {
        log::error!("Cannot initialize LLM client: {:#}", e);
        Arc::new(UnconfiguredChatter { reason: format!("{:#}", e) })
      }
    };
    Self::with_chatter(app_config, chatter)
  }

  pub fn with_chatter(app_config: &Config, chatter: Arc<dyn LLMChatter>) -> Self {
    let news_provider: Option<Arc<dyn NewsProvider>> = build_news_provider(app_config);

    let report_service: ReportService = ReportService::new(chatter, app_config.llm_model_config(), news_provider);
    let analysis_service: Arc<FinancialAnalysisServices> = Arc::new(FinancialAnalysisServices::new(report_service));
    let analysis_controller: Arc<AnalysisController> = Arc::new(AnalysisController::new(analysis_service.clone()));
    AppState { analysis_controller }
  }
}

pub struct CreateApp {
  app_state: AppState,
}

impl CreateApp {
  pub fn new(app_settings: Config) -> Self {
    let app_state: AppState = AppState::new(&app_settings);
    CreateApp { app_state }
  }

  pub fn build_app(&self,) -> App<impl actix_web::dev::ServiceFactory<actix_web::dev::ServiceRequest,Config = (),Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,Error = actix_web::Error,InitError = (),>,> {
    App::new()
    .app_data(web::Data::new(self.app_state.analysis_controller.clone()))
    .configure(Routes::configure)
  }
}
