use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use crate::analysis::evaluation::Language;
use crate::analysis::news::cache::{self, NewsCache};
use crate::analysis::news::models::NewsArticle;

/// Days of news freshness for an analysis timeframe; unknown values mean one year.
pub fn timeframe_days(timeframe: &str) -> u32 {
  match timeframe.trim() {
    "6 months" => 180,
    "1 year" => 365,
    "2 years" => 730,
    "5 years" => 1825,
    _ => 365,
  }
}

pub fn format_news_for_prompt(news_articles: &[NewsArticle]) -> String {
  if news_articles.is_empty() {
    return "No recent news articles found.".to_string();
  }

  let mut formatted_news = String::from("Recent News Articles:\n\n");
  for article in news_articles {
    formatted_news.push_str(&format!("Title: {}\n", article.title));
    formatted_news.push_str(&format!("Source: {}\n", article.source));
    formatted_news.push_str(&format!("Date: {}\n", article.published));
    formatted_news.push_str(&format!("Summary: {}\n", article.description));
    formatted_news.push_str(&format!("Link: {}\n", article.link));
    formatted_news.push_str(&"-".repeat(80));
    formatted_news.push('\n');
  }

  return formatted_news;
}

/// A company news search backend.
#[async_trait]
pub trait NewsProvider : Send + Sync {
  fn name(&self) -> &'static str;

  async fn search(&self, company: &str, timeframe: &str, language: Language) -> Result<Vec<NewsArticle>>;

  /// Recent news for a company, served from the global cache when possible.
  /// Failures are logged and yield an empty list.
  async fn fetch_company_news(&self, company: &str, timeframe: &str, language: Language) -> Vec<NewsArticle> {
    let key: String = NewsCache::cache_key(self.name(), company, timeframe, language.code());
    let news_cache: &'static Mutex<NewsCache> = cache::get_cache();

    if let Ok(cache_guard) = news_cache.lock() {
      let cached = cache_guard.get_company_news(&key);
      if !cached.is_empty() {
        log::info!("Returning company news for {} from cache.", company);
        return cached;
      }
    }

    match self.search(company, timeframe, language).await {
      Ok(articles) => {
        if !articles.is_empty() {
          match news_cache.lock() {
            Ok(mut cache_guard) => {
              cache_guard.set_company_news(&key, articles.clone());
              log::debug!("News cache holds {} searches", cache_guard.len());
            }
            Err(e) => log::error!("News cache lock poisoned, not caching {}: {}", company, e),
          }
        }
        articles
      }
      Err(e) => {
        log::error!("Error fetching news from {} for {}: {:#}", self.name(), company, e);
        Vec::new()
      }
    }
  }
}
