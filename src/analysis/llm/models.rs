use serde::{Serialize, Deserialize};
use std::sync::OnceLock;
use anyhow::{Result, Context};

use crate::analysis::llm::model_provider::{ChatMessage, LLMChatter, LLMModelConfig, ModelProvider};
use crate::analysis::llm::chat_completions::ChatCompletionsProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMModel {
  pub display_name: String,
  pub model_name: String, // the identifier sent to the API
  pub provider: ModelProvider,
}

impl LLMModel {
  pub fn new(display_name: &str, model_name: &str, provider: ModelProvider) -> Self {
    LLMModel {
      display_name: display_name.to_string(),
      model_name: model_name.to_string(),
      provider,
    }
  }
}

fn available_models_data() -> Vec<LLMModel> {
  vec![
    LLMModel::new("[groq] deepseek-r1-distill-llama-70b", "deepseek-r1-distill-llama-70b", ModelProvider::Groq),
    LLMModel::new("[groq] llama-3.3-70b", "llama-3.3-70b-versatile", ModelProvider::Groq),
    LLMModel::new("[groq] llama3-8b", "llama3-8b-8192", ModelProvider::Groq),
    LLMModel::new("[together] DeepSeek-R1", "deepseek-ai/DeepSeek-R1", ModelProvider::Together),
    LLMModel::new("[together] Llama-3.3-70B-Instruct-Turbo", "meta-llama/Llama-3.3-70B-Instruct-Turbo", ModelProvider::Together),
    LLMModel::new("[openai] gpt-4o", "gpt-4o", ModelProvider::OpenAI),
    LLMModel::new("[openai] gpt-4o-mini", "gpt-4o-mini", ModelProvider::OpenAI),
  ]
}

pub static AVAILABLE_MODELS: OnceLock<Vec<LLMModel>> = OnceLock::new();

pub fn get_available_models() -> &'static [LLMModel] {
  AVAILABLE_MODELS.get_or_init(available_models_data).as_slice()
}

pub fn get_model_info(model_name: &str) -> Option<&'static LLMModel> {
  get_available_models().iter().find(|&model_desc| model_desc.model_name == model_name)
}

pub fn get_model(config: &LLMModelConfig) -> Result<Box<dyn LLMChatter>> {
  log::info!("Initializing LLM client for provider: {}, model: {}", config.provider, config.model_name);

  match get_model_info(&config.model_name) {
    Some(info) => log::debug!("Using catalogued model {}", info.display_name),
    None => log::warn!("Model {} is not in the catalogue, sending it to {} as-is", config.model_name, config.provider),
  }

  let client = ChatCompletionsProvider::from_config(config)?;
  Ok(Box::new(client))
}

/// Single-turn completion: system context plus one user prompt, returning the text.
pub async fn generate_response(chatter: &dyn LLMChatter, config: &LLMModelConfig, system_context: &str, prompt: &str) -> Result<String> {
  let mut messages: Vec<ChatMessage> = Vec::new();
  if !system_context.trim().is_empty() {
    messages.push(ChatMessage::system(system_context));
  }
  messages.push(ChatMessage::user(prompt));

  let response = chatter.chat(messages, config).await.with_context(|| format!("{} completion failed", config.model_name))?;
  log::debug!("LLM raw response ({} chars): {}", response.content.len(), response.content);

  Ok(response.content)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::llm::model_provider::{LLMResponse, DEFAULT_MODEL_NAME};
  use async_trait::async_trait;
  use std::sync::Mutex;

  struct RecordingChatter {
    seen: Mutex<Vec<ChatMessage>>,
  }

  #[async_trait]
  impl LLMChatter for RecordingChatter {
    async fn chat(&self, messages: Vec<ChatMessage>, _config: &LLMModelConfig) -> Result<LLMResponse> {
      self.seen.lock().unwrap().extend(messages);
      Ok(LLMResponse { content: "ok".to_string() })
    }
  }

  #[test]
  fn test_default_model_is_in_catalogue() {
    let info = get_model_info(DEFAULT_MODEL_NAME).expect("default model listed");
    assert_eq!(info.provider, ModelProvider::Groq);
  }

  #[test]
  fn test_get_model_without_key_fails() {
    let config = LLMModelConfig::new(ModelProvider::Groq, DEFAULT_MODEL_NAME, None, None);
    assert!(get_model(&config).is_err());
  }

  #[tokio::test]
  async fn test_generate_response_sends_system_then_user() {
    let chatter = RecordingChatter { seen: Mutex::new(Vec::new()) };
    let config = LLMModelConfig::new(ModelProvider::Groq, DEFAULT_MODEL_NAME, None, None);

    let text = generate_response(&chatter, &config, "You are an analyst.", "Analyze Apple").await.unwrap();

    assert_eq!(text, "ok");
    let seen = chatter.seen.lock().unwrap();
    assert_eq!(*seen, vec![ChatMessage::system("You are an analyst."), ChatMessage::user("Analyze Apple")]);
  }

  #[tokio::test]
  async fn test_generate_response_skips_blank_system_context() {
    let chatter = RecordingChatter { seen: Mutex::new(Vec::new()) };
    let config = LLMModelConfig::new(ModelProvider::Groq, DEFAULT_MODEL_NAME, None, None);

    generate_response(&chatter, &config, "  ", "Analyze Apple").await.unwrap();

    assert_eq!(chatter.seen.lock().unwrap().len(), 1);
  }
}
