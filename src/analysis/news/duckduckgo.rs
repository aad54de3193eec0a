use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};

use crate::analysis::evaluation::Language;
use crate::analysis::news::models::{DuckDuckGoResponse, DuckDuckGoTopic, NewsArticle};
use crate::analysis::news::provider::NewsProvider;

pub const DUCKDUCKGO_URL: &str = "https://api.duckduckgo.com/";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Keyless news lookup through the DuckDuckGo instant-answer API. Used when no
/// Brave Search key is configured.
pub struct DuckDuckGoNewsService {
  base_url: String,
  client: Client,
}

impl DuckDuckGoNewsService {

  pub fn new(base_url: &str) -> Self {
    DuckDuckGoNewsService {
      base_url: base_url.to_string(),
      client: Client::new(),
    }
  }

  fn headers() -> HeaderMap {
    let mut headers: HeaderMap = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    return headers;
  }

  fn to_articles(topics: Vec<DuckDuckGoTopic>, published: &str) -> Vec<NewsArticle> {
    topics.into_iter().filter_map(|topic| topic.into_article(published)).collect()
  }
}

#[async_trait]
impl NewsProvider for DuckDuckGoNewsService {

  fn name(&self) -> &'static str {
    "duckduckgo"
  }

  async fn search(&self, company: &str, timeframe: &str, language: Language) -> Result<Vec<NewsArticle>> {
    let query: String = format!("{} company financial news stock market", company);
    log::debug!("DuckDuckGo search: q={:?} timeframe={} lang={}", query, timeframe, language.code());

    let response: Response = self.client
      .get(&self.base_url)
      .headers(Self::headers())
      .query(&[
        ("q", query.as_str()),
        ("format", "json"),
        ("no_html", "1"),
        ("skip_disambig", "1"),
        ("no_redirect", "1"),
        ("t", "Finance"),
      ])
      .send()
      .await
      .context("DuckDuckGo request failed")?
      .error_for_status()
      .context("DuckDuckGo returned an error status")?;

    // the API answers with a javascript content type, so decode the body directly
    let body: String = response.text().await.context("Cannot read DuckDuckGo response")?;
    let data: DuckDuckGoResponse = serde_json::from_str(&body).context("Malformed DuckDuckGo response")?;

    let published: String = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut articles: Vec<NewsArticle> = Self::to_articles(data.related_topics, &published);
    if articles.is_empty() {
      articles = Self::to_articles(data.results, &published);
    }

    log::info!("Fetched {} news articles for {}", articles.len(), company);
    Ok(articles)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use wiremock::matchers::{header, method, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  #[tokio::test]
  async fn test_related_topics_become_articles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(query_param("q", "Umbrella company financial news stock market"))
      .and(query_param("format", "json"))
      .and(header("User-Agent", BROWSER_USER_AGENT))
      .respond_with(ResponseTemplate::new(200).set_body_raw(
        r#"{"RelatedTopics": [{"Text": "Umbrella - Pharma results", "FirstURL": "https://duckduckgo.com/Umbrella"}], "Results": [{"Text": "ignored", "FirstURL": "https://x.y/z"}]}"#,
        "application/x-javascript",
      ))
      .expect(1)
      .mount(&server)
      .await;

    let service = DuckDuckGoNewsService::new(&server.uri());
    let articles = service.fetch_company_news("Umbrella", "1 year", Language::English).await;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Umbrella");
    assert_eq!(articles[0].source, "duckduckgo.com");
    assert!(!articles[0].published.is_empty());

    let again = service.fetch_company_news("Umbrella", "1 year", Language::English).await;
    assert_eq!(again, articles);
  }

  #[tokio::test]
  async fn test_results_used_when_no_related_topics() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "RelatedTopics": [],
        "Results": [{"Text": "Hooli official site", "FirstURL": "https://hooli.example/"}]
      })))
      .mount(&server)
      .await;

    let service = DuckDuckGoNewsService::new(&server.uri());
    let articles = service.fetch_company_news("Hooli", "2 years", Language::Marathi).await;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Hooli official site");
    assert_eq!(articles[0].source, "hooli.example");
  }

  #[tokio::test]
  async fn test_error_status_yields_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&server)
      .await;

    let service = DuckDuckGoNewsService::new(&server.uri());
    assert!(service.fetch_company_news("Vandelay", "1 year", Language::English).await.is_empty());
  }
}
