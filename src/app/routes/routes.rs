use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use serde::{Serialize, Deserialize};

use crate::app::controller::analysis_controller::{AnalysisController, AnalysisParameters};
use crate::app::services::service::InvalidRequest;

#[derive(Deserialize, Serialize, Default)]
pub struct AnalysisReportRequest {
  company: Option<String>,
  industry: Option<String>,
  timeframe: Option<String>,
  risk_profile: Option<String>,
  investment_horizon: Option<String>,
  language: Option<String>,
}

impl From<AnalysisReportRequest> for AnalysisParameters {
  fn from(request: AnalysisReportRequest) -> Self {
    AnalysisParameters {
      company: request.company,
      industry: request.industry,
      timeframe: request.timeframe,
      risk_profile: request.risk_profile,
      investment_horizon: request.investment_horizon,
      language: request.language,
    }
  }
}

#[derive(Deserialize, Serialize)]
pub struct EvaluateRequest {
  text: String,
  language: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct MockDataQuery {
  company: Option<String>,
}

pub struct Routes;

impl Routes {

  pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(Self::health)));
    cfg.service(web::resource("/analysis/languages").route(web::get().to(Self::get_languages)));
    cfg.service(web::resource("/analysis/options").route(web::get().to(Self::get_options)));
    cfg.service(web::resource("/analysis/models").route(web::get().to(Self::get_models)));
    cfg.service(web::resource("/analysis/report").route(web::post().to(Self::generate_report)));
    cfg.service(web::resource("/analysis/evaluate").route(web::post().to(Self::evaluate)));
    cfg.service(web::resource("/analysis/mock-data").route(web::get().to(Self::mock_data)));
    cfg.service(web::resource("/analysis/news").route(web::get().to(Self::news)));
  }

  async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
      "status": "ok",
      "Info": "Welcome to Rust AI Financial Analysis.",
      "code": 200,
    }))
  }

  async fn get_languages(controller: web::Data<Arc<AnalysisController>>) -> impl Responder {
    HttpResponse::Ok().json(controller.get_languages())
  }

  async fn get_options(controller: web::Data<Arc<AnalysisController>>) -> impl Responder {
    HttpResponse::Ok().json(controller.get_options())
  }

  async fn get_models(controller: web::Data<Arc<AnalysisController>>) -> impl Responder {
    HttpResponse::Ok().json(controller.get_available_models())
  }

  async fn evaluate(controller: web::Data<Arc<AnalysisController>>, request: web::Json<EvaluateRequest>) -> impl Responder {
    HttpResponse::Ok().json(controller.evaluate(&request.text, request.language.as_deref()))
  }

  async fn mock_data(controller: web::Data<Arc<AnalysisController>>, query: web::Query<MockDataQuery>) -> impl Responder {
    HttpResponse::Ok().json(controller.get_mock_data(query.company.as_deref()))
  }

  async fn news(controller: web::Data<Arc<AnalysisController>>, query: web::Query<AnalysisReportRequest>) -> impl Responder {
    let articles = controller.get_news(query.into_inner().into()).await;
    HttpResponse::Ok().json(articles)
  }

  async fn generate_report(controller: web::Data<Arc<AnalysisController>>, request: web::Json<AnalysisReportRequest>) -> impl Responder {
    let result = controller.generate_reports(request.into_inner().into()).await;

    match result {
      Ok(bundle) => HttpResponse::Ok().json(bundle),
      Err(e) if e.downcast_ref::<InvalidRequest>().is_some() => HttpResponse::BadRequest().json(serde_json::json!({
          "error": e.to_string(),
      })),
      Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
          "error": e.to_string(),
      }))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{test, App};
  use crate::app::config::Config;
  use crate::app::factory::AppState;
  use crate::app::services::report_service::tests::{ScriptedChatter, EVALUATION_TEXT};

  fn test_app_state(chatter: Arc<ScriptedChatter>) -> AppState {
    AppState::with_chatter(&Config::for_tests(), chatter)
  }

  #[actix_web::test]
  async fn test_health() {
    let state = test_app_state(Arc::new(ScriptedChatter::new(vec![])));
    let app = test::init_service(App::new().app_data(web::Data::new(state.analysis_controller.clone())).configure(Routes::configure)).await;

    let response: serde_json::Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(response["status"], "ok");
  }

  #[actix_web::test]
  async fn test_evaluate_endpoint() {
    let state = test_app_state(Arc::new(ScriptedChatter::new(vec![])));
    let app = test::init_service(App::new().app_data(web::Data::new(state.analysis_controller.clone())).configure(Routes::configure)).await;

    let request = test::TestRequest::post()
      .uri("/analysis/evaluate")
      .set_json(serde_json::json!({"text": "1. **सटीकता स्कोर** (1-10): 8", "language": "Hindi"}))
      .to_request();
    let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response["scores"]["सटीकता स्कोर"], 8);
    assert_eq!(response["improvements"], serde_json::json!([]));
  }

  #[actix_web::test]
  async fn test_evaluate_rejects_missing_text() {
    let state = test_app_state(Arc::new(ScriptedChatter::new(vec![])));
    let app = test::init_service(App::new().app_data(web::Data::new(state.analysis_controller.clone())).configure(Routes::configure)).await;

    let request = test::TestRequest::post()
      .uri("/analysis/evaluate")
      .set_json(serde_json::json!({"language": "English"}))
      .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_report_endpoint_runs_all_reports() {
    let chatter = Arc::new(ScriptedChatter::new(vec![
      Ok("market"), Ok(EVALUATION_TEXT), Ok("projections"), Ok(EVALUATION_TEXT), Ok("advice"), Ok(EVALUATION_TEXT),
    ]));
    let state = test_app_state(chatter);
    let app = test::init_service(App::new().app_data(web::Data::new(state.analysis_controller.clone())).configure(Routes::configure)).await;

    let request = test::TestRequest::post()
      .uri("/analysis/report")
      .set_json(serde_json::json!({"company": "Apple", "risk_profile": "Aggressive"}))
      .to_request();
    let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response["success"], true);
    assert_eq!(response["market_trends"]["report"], "market");
    assert_eq!(response["investment_recommendations"]["evaluation"]["scores"]["Strategic Depth Score"], 9);
    assert_eq!(response["news"], serde_json::json!([]));
  }

  #[actix_web::test]
  async fn test_report_endpoint_rejects_blank_company() {
    let chatter = Arc::new(ScriptedChatter::new(vec![]));
    let state = test_app_state(chatter.clone());
    let app = test::init_service(App::new().app_data(web::Data::new(state.analysis_controller.clone())).configure(Routes::configure)).await;

    let request = test::TestRequest::post()
      .uri("/analysis/report")
      .set_json(serde_json::json!({"company": "   "}))
      .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Company name must not be empty");
    assert!(chatter.prompts.lock().unwrap().is_empty());
  }

  #[actix_web::test]
  async fn test_mock_data_and_options() {
    let state = test_app_state(Arc::new(ScriptedChatter::new(vec![])));
    let app = test::init_service(App::new().app_data(web::Data::new(state.analysis_controller.clone())).configure(Routes::configure)).await;

    let mock: serde_json::Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/analysis/mock-data?company=Tesla").to_request()).await;
    assert_eq!(mock["price_chart_title"], "Tesla Stock Price and Volume");
    assert_eq!(mock["financial_data"].as_array().map(|a| a.len()), Some(12));

    let options: serde_json::Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/analysis/options").to_request()).await;
    assert_eq!(options.as_array().map(|a| a.len()), Some(4));

    let languages: serde_json::Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/analysis/languages").to_request()).await;
    assert_eq!(languages[1]["code"], "hi");
  }
}
