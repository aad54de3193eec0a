use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::analysis::evaluation::Language;
use crate::analysis::news::models::{BraveHeaderData, BraveSearchResponse, NewsArticle};
use crate::analysis::news::provider::{timeframe_days, NewsProvider};

pub const BRAVE_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";
pub const NEWS_RESULT_COUNT: u32 = 10;

pub struct BraveNewsService {
  api_key: String,
  base_url: String,
  client: Client,
}

impl BraveNewsService {

  pub fn new(api_key: &str, base_url: &str) -> Self {
    BraveNewsService {
      api_key: api_key.to_string(),
      base_url: base_url.to_string(),
      client: Client::new(),
    }
  }
}

#[async_trait]
impl NewsProvider for BraveNewsService {

  fn name(&self) -> &'static str {
    "brave"
  }

  async fn search(&self, company: &str, timeframe: &str, language: Language) -> Result<Vec<NewsArticle>> {
    let query: String = format!("{} company news", company);
    let freshness: String = format!("d{}", timeframe_days(timeframe));
    let count: String = NEWS_RESULT_COUNT.to_string();

    log::debug!("Brave search: q={:?} freshness={} lang={}", query, freshness, language.code());

    let response: Response = self.client
      .get(&self.base_url)
      .headers(BraveHeaderData::new(self.api_key.clone()).to_header_map())
      .query(&[
        ("q", query.as_str()),
        ("count", count.as_str()),
        ("search_lang", language.code()),
        ("freshness", freshness.as_str()),
        ("text_format", "plain"),
      ])
      .send()
      .await
      .context("Brave Search request failed")?
      .error_for_status()
      .context("Brave Search returned an error status")?;

    let data: BraveSearchResponse = response.json().await.context("Malformed Brave Search response")?;
    let articles: Vec<NewsArticle> = data.web.results.into_iter().map(NewsArticle::from).collect();

    log::info!("Fetched {} news articles for {}", articles.len(), company);
    Ok(articles)
  }
}
