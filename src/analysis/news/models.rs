use serde::{Serialize, Deserialize};
use reqwest::header::{HeaderValue, HeaderMap, ACCEPT};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
  pub title: String,
  pub description: String,
  pub link: String,
  pub published: String,
  pub source: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BraveProfile {
  #[serde(default)]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BraveWebResult {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub url: String,
  #[serde(default, alias = "page_age")]
  pub published: Option<String>,
  #[serde(default)]
  pub age: Option<String>,
  #[serde(default)]
  pub source: Option<String>,
  #[serde(default)]
  pub profile: Option<BraveProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BraveWebResults {
  #[serde(default)]
  pub results: Vec<BraveWebResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BraveSearchResponse {
  #[serde(default)]
  pub web: BraveWebResults,
}

impl From<BraveWebResult> for NewsArticle {
  fn from(result: BraveWebResult) -> Self {
    let published = result.published.or(result.age).unwrap_or_default();
    let source = result.source
      .or_else(|| result.profile.and_then(|profile| profile.name))
      .unwrap_or_default();

    NewsArticle {
      title: result.title,
      description: result.description,
      link: result.url,
      published,
      source,
    }
  }
}

/// One entry of a DuckDuckGo instant-answer `RelatedTopics` or `Results` list.
/// Topic groups carry neither field and are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuckDuckGoTopic {
  #[serde(default, rename = "Text")]
  pub text: Option<String>,
  #[serde(default, rename = "FirstURL")]
  pub first_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuckDuckGoResponse {
  #[serde(default, rename = "RelatedTopics")]
  pub related_topics: Vec<DuckDuckGoTopic>,
  #[serde(default, rename = "Results")]
  pub results: Vec<DuckDuckGoTopic>,
}

impl DuckDuckGoTopic {
  /// Title is the text before the first " - ", else its first 100 characters;
  /// the source is the link's host.
  pub fn into_article(self, published: &str) -> Option<NewsArticle> {
    let (text, link) = match (self.text, self.first_url) {
      (Some(text), Some(link)) => (text, link),
      _ => return None,
    };

    let title: String = match text.split_once(" - ") {
      Some((head, _)) => head.to_string(),
      None => text.chars().take(100).collect(),
    };
    let source: String = link.split('/').nth(2)
      .filter(|host| !host.is_empty())
      .unwrap_or("Unknown Source")
      .to_string();

    Some(NewsArticle {
      title,
      description: text,
      link,
      published: published.to_string(),
      source,
    })
  }
}

#[derive(Debug, Clone)]
pub struct BraveHeaderData {
  pub subscription_token : String,
}

impl BraveHeaderData {
  pub fn new(subscription_token: String) -> Self {
    BraveHeaderData { subscription_token }
  }

  pub fn to_header_map(&self) -> HeaderMap {
    let mut headers: HeaderMap = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&self.subscription_token) {
      headers.insert("X-Subscription-Token", value);
    }
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    return headers;
  }
}
