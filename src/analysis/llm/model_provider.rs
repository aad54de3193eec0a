use serde::{Serialize, Deserialize};
use std::str::FromStr;
use std::fmt;
use anyhow::{Result};
use async_trait::async_trait;

pub const DEFAULT_MODEL_NAME: &str = "deepseek-r1-distill-llama-70b";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelProvider {
  Groq,
  Together,
  OpenAI,
}

impl ModelProvider {

  /// Chat-completions endpoint used when no base url is configured.
  pub fn default_base_url(&self) -> &'static str {
    match self {
      ModelProvider::Groq => "https://api.groq.com/openai/v1/chat/completions",
      ModelProvider::Together => "https://api.together.xyz/v1/chat/completions",
      ModelProvider::OpenAI => "https://api.openai.com/v1/chat/completions",
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMModelConfig {
  pub provider: ModelProvider,
  pub model_name: String,
  #[serde(skip_serializing)]
  pub api_key: Option<String>,
  pub base_url: Option<String>, // falls back to the provider's public endpoint
  pub temperature: Option<f32>,
  pub max_tokens: Option<u32>,
  pub top_p : Option<f32>
}

impl LLMModelConfig {
  pub fn new(provider: ModelProvider, model_name: &str, api_key: Option<String>, base_url: Option<String>) -> Self {
    LLMModelConfig {
      provider,
      model_name: model_name.to_string(),
      api_key,
      base_url,
      temperature: Some(DEFAULT_TEMPERATURE),
      max_tokens: Some(DEFAULT_MAX_TOKENS),
      top_p: None,
    }
  }

  pub fn endpoint(&self) -> String {
    match &self.base_url {
      Some(url) if !url.trim().is_empty() => url.clone(),
      _ => self.provider.default_base_url().to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: String, // "system", "user" or "assistant"
  pub content: String,
}

impl ChatMessage {
  pub fn system(content: &str) -> Self {
    ChatMessage { role: "system".to_string(), content: content.to_string() }
  }

  pub fn user(content: &str) -> Self {
    ChatMessage { role: "user".to_string(), content: content.to_string() }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
  pub content: String,
}

impl fmt::Display for ModelProvider {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ModelProvider::Groq => write!(f, "Groq"),
      ModelProvider::Together => write!(f, "Together"),
      ModelProvider::OpenAI => write!(f, "OpenAI"),
    }
  }
}

impl FromStr for ModelProvider {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "groq" => Ok(ModelProvider::Groq),
      "together" | "togetherai" | "together ai" => Ok(ModelProvider::Together),
      "openai" => Ok(ModelProvider::OpenAI),
      _ => Err(format!("Unknown model provider: {}", s)),
    }
  }
}

#[async_trait]
pub trait LLMChatter : Send + Sync {
  async fn chat(&self, messages: Vec<ChatMessage>, config : &LLMModelConfig) -> Result<LLMResponse>;
}
