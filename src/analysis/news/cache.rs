use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, OnceLock};

use crate::analysis::news::models::NewsArticle;

/// Upper bound on distinct searches held by the global cache.
pub const MAX_CACHED_SEARCHES: usize = 256;

/// Company news keyed by search, so repeated report runs skip the search API.
/// Once full, the oldest search is evicted first.
pub struct NewsCache {
  company_news_cache: HashMap<String, Vec<NewsArticle>>,
  insertion_order: VecDeque<String>,
  capacity: usize,
}

static GLOBAL_NEWS_CACHE: OnceLock<Mutex<NewsCache>> = OnceLock::new();

impl NewsCache {
  pub fn new() -> Self {
    Self::with_capacity(MAX_CACHED_SEARCHES)
  }

  pub fn with_capacity(capacity: usize) -> Self {
    NewsCache {
      company_news_cache: HashMap::new(),
      insertion_order: VecDeque::new(),
      capacity: capacity.max(1),
    }
  }

  pub fn cache_key(provider: &str, company: &str, timeframe: &str, language_code: &str) -> String {
    format!("{}|{}|{}|{}", provider, company.trim().to_lowercase(), timeframe.trim(), language_code)
  }

  pub fn len(&self) -> usize {
    self.company_news_cache.len()
  }

  pub fn get_company_news(&self, key: &str) -> Vec<NewsArticle> {
    match self.company_news_cache.get(key) {
      Some(news) => news.clone(),
      None => {
        log::info!("Company news not found in cache for {}", key);
        Vec::new()
      }
    }
  }

  pub fn set_company_news(&mut self, key: &str, data: Vec<NewsArticle>) {
    if !self.company_news_cache.contains_key(key) {
      while self.company_news_cache.len() >= self.capacity {
        match self.insertion_order.pop_front() {
          Some(oldest) => {
            log::debug!("Evicting cached news for {}", oldest);
            self.company_news_cache.remove(&oldest);
          }
          None => break,
        }
      }
      self.insertion_order.push_back(key.to_string());
    }
    self.company_news_cache.insert(key.to_string(), data);
  }
}

impl Default for NewsCache {
  fn default() -> Self {
    Self::new()
  }
}

pub fn get_cache() -> &'static Mutex<NewsCache> {
  GLOBAL_NEWS_CACHE.get_or_init(|| {
    log::info!("Global news cache initialized.");
    Mutex::new(NewsCache::new())
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn article(link: &str) -> NewsArticle {
    NewsArticle {
      title: format!("title {}", link),
      description: String::new(),
      link: link.to_string(),
      published: String::new(),
      source: String::new(),
    }
  }

  #[test]
  fn test_set_replaces_previous_entry() {
    let mut cache = NewsCache::new();
    let key = NewsCache::cache_key("brave", " Apple ", "1 year", "en");

    cache.set_company_news(&key, vec![article("a"), article("b")]);
    cache.set_company_news(&key, vec![article("c")]);

    let links: Vec<String> = cache.get_company_news(&key).into_iter().map(|a| a.link).collect();
    assert_eq!(links, vec!["c"]);
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn test_oldest_search_is_evicted_at_capacity() {
    let mut cache = NewsCache::with_capacity(2);

    cache.set_company_news("a", vec![article("1")]);
    cache.set_company_news("b", vec![article("2")]);
    cache.set_company_news("a", vec![article("3")]);
    cache.set_company_news("c", vec![article("4")]);

    assert_eq!(cache.len(), 2);
    assert!(cache.get_company_news("a").is_empty());
    assert_eq!(cache.get_company_news("b")[0].link, "2");
    assert_eq!(cache.get_company_news("c")[0].link, "4");
  }

  #[test]
  fn test_key_normalises_company_and_separates_providers() {
    assert_eq!(
      NewsCache::cache_key("brave", " Apple ", "1 year", "en"),
      NewsCache::cache_key("brave", "apple", "1 year", "en")
    );
    assert_ne!(
      NewsCache::cache_key("brave", "apple", "1 year", "en"),
      NewsCache::cache_key("duckduckgo", "apple", "1 year", "en")
    );
    assert!(NewsCache::new().get_company_news("missing").is_empty());
  }
}
