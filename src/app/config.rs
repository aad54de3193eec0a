use std::env;
use std::str::FromStr;

use log;

use crate::analysis::llm::model_provider::{LLMModelConfig, ModelProvider, DEFAULT_MODEL_NAME};
use crate::analysis::news::brave::BRAVE_SEARCH_URL;
use crate::analysis::news::duckduckgo::DUCKDUCKGO_URL;

#[derive(Clone)]
pub struct Config {
  pub llm_provider: ModelProvider,
  pub llm_api_key: String,
  pub llm_base_url: Option<String>,
  pub llm_model_name: String,
  pub brave_api_key: Option<String>,
  pub brave_base_url: String,
  pub duckduckgo_base_url: String,
  pub news_enabled: bool,
  pub server_host: String,
  pub server_port: u16,
}

fn optional_var(name: &str) -> Option<String> {
  env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

impl Config {

  pub fn load() -> Self {
    match dotenv::dotenv() {
      Ok(_) => log::info!("Loaded .env file"),
      Err(_) => log::warn!("No .env file found"),
    }

    let llm_provider: ModelProvider = match optional_var("LLM_PROVIDER") {
      Some(name) => ModelProvider::from_str(&name).unwrap_or_else(|e| {
        log::error!("{}, using Groq", e);
        ModelProvider::Groq
      }),
      None => ModelProvider::Groq,
    };

    let llm_api_key: String = optional_var("GROQ_API_KEY").or_else(|| optional_var("LLM_API_KEY")).unwrap_or_else(|| {
      log::error!("Warning: GROQ_API_KEY not found, report generation will fail until it is set");
      String::new()
    });

    let llm_base_url: Option<String> = optional_var("GROQ_BASE_URL").or_else(|| optional_var("LLM_BASE_URL"));

    let llm_model_name: String = optional_var("LLM_MODEL_NAME").unwrap_or_else(|| {
      log::info!("LLM_MODEL_NAME not set, using default {}", DEFAULT_MODEL_NAME);
      DEFAULT_MODEL_NAME.to_string()
    });

    let news_enabled: bool = match optional_var("NEWS_ENABLED").map(|value| value.to_lowercase()) {
      Some(value) => !matches!(value.as_str(), "false" | "0" | "no" | "off"),
      None => true,
    };

    let brave_api_key: Option<String> = optional_var("BRAVE_API_KEY");
    if news_enabled && brave_api_key.is_none() {
      log::warn!("Warning: BRAVE_API_KEY not found, falling back to DuckDuckGo for news");
    }

    let brave_base_url: String = optional_var("BRAVE_BASE_URL").unwrap_or_else(|| BRAVE_SEARCH_URL.to_string());
    let duckduckgo_base_url: String = optional_var("DUCKDUCKGO_BASE_URL").unwrap_or_else(|| DUCKDUCKGO_URL.to_string());

    let server_host: String = optional_var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port: u16 = match optional_var("SERVER_PORT").map(|port| port.parse::<u16>()) {
      Some(Ok(port)) => port,
      Some(Err(e)) => {
        log::error!("Invalid SERVER_PORT ({}), using 8080", e);
        8080
      }
      None => 8080,
    };

    return Config {
      llm_provider, llm_api_key, llm_base_url, llm_model_name, brave_api_key, brave_base_url, duckduckgo_base_url,
      news_enabled, server_host, server_port
    }
  }

  /// Completion settings handed to the provider at construction time.
  pub fn llm_model_config(&self) -> LLMModelConfig {
    LLMModelConfig::new(
      self.llm_provider,
      &self.llm_model_name,
      Some(self.llm_api_key.clone()),
      self.llm_base_url.clone(),
    )
  }
}

#[cfg(test)]
impl Config {
  pub fn for_tests() -> Self {
    Config {
      llm_provider: ModelProvider::Groq,
      llm_api_key: "test-key".to_string(),
      llm_base_url: None,
      llm_model_name: DEFAULT_MODEL_NAME.to_string(),
      brave_api_key: None,
      brave_base_url: BRAVE_SEARCH_URL.to_string(),
      duckduckgo_base_url: DUCKDUCKGO_URL.to_string(),
      news_enabled: false,
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_llm_model_config_carries_settings() {
    let mut config = Config::for_tests();
    config.llm_base_url = Some("http://localhost:1234/v1/chat/completions".to_string());

    let model_config = config.llm_model_config();
    assert_eq!(model_config.provider, ModelProvider::Groq);
    assert_eq!(model_config.model_name, DEFAULT_MODEL_NAME);
    assert_eq!(model_config.api_key.as_deref(), Some("test-key"));
    assert_eq!(model_config.endpoint(), "http://localhost:1234/v1/chat/completions");
    assert_eq!(model_config.temperature, Some(0.7));
    assert_eq!(model_config.max_tokens, Some(2000));
  }
}
