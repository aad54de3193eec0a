use crate::analysis::llm::model_provider::{ChatMessage, LLMChatter, LLMModelConfig, LLMResponse};

use reqwest::{header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE}, Client, Response};
use serde::{Deserialize, Serialize};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;


#[derive(Serialize, Debug)]
struct ChatCompletionRequest<'a> {
  messages: &'a [ChatMessage],
  model: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  temperature: Option<f32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  top_p: Option<f32>,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionMessage {
  #[serde(default)]
  content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionChoice {
  message: ChatCompletionMessage,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
  choices: Vec<ChatCompletionChoice>,
}

/// Client for OpenAI-compatible chat-completions APIs (Groq, Together, OpenAI).
pub struct ChatCompletionsProvider {
  endpoint : String,
  api_key : String,
  model_name: String,
  client : Client
}

impl ChatCompletionsProvider {

  pub fn new(api_key: &str, endpoint: &str, model_name: &str) -> Self {
    ChatCompletionsProvider {
      endpoint: endpoint.to_string(),
      api_key: api_key.to_string(),
      model_name: model_name.to_string(),
      client: Client::new(),
    }
  }

  pub fn from_config(config: &LLMModelConfig) -> Result<Self> {
    let api_key: &str = config.api_key.as_deref().filter(|key| !key.trim().is_empty())
      .with_context(|| format!("{} API key not configured", config.provider))?;
    Ok(Self::new(api_key, &config.endpoint(), &config.model_name))
  }

  fn headers(&self) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key)).context("API key is not a valid header value")?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
  }
}

/// Drops `<think>...</think>` blocks emitted by reasoning models before the answer.
pub fn strip_reasoning(content: &str) -> String {
  let mut output = String::with_capacity(content.len());
  let mut rest = content;

  while let Some(start) = rest.find("<think>") {
    output.push_str(&rest[..start]);
    match rest[start..].find("</think>") {
      Some(end) => rest = &rest[start + end + "</think>".len()..],
      None => {
        rest = "";
        break;
      }
    }
  }
  output.push_str(rest);

  output.trim().to_string()
}

#[async_trait]
impl LLMChatter for ChatCompletionsProvider {
  async fn chat(&self, messages: Vec<ChatMessage>, config: &LLMModelConfig) -> Result<LLMResponse> {
    let request = ChatCompletionRequest {
      model: &self.model_name,
      messages: &messages,
      temperature: config.temperature,
      max_tokens: config.max_tokens,
      top_p: config.top_p,
    };

    let response: Response = self.client.post(&self.endpoint).headers(self.headers()?).json(&request).send().await
      .with_context(|| format!("Failed to reach {} chat completions endpoint", config.provider))?;

    if response.status().is_success() {
      let completion : ChatCompletionResponse = response.json().await.context("Malformed chat completion response")?;
      let first : ChatCompletionChoice = completion.choices.into_iter().next().ok_or_else(|| anyhow!("No response choices received from {}", config.provider))?;
      return Ok(LLMResponse{
        content: strip_reasoning(&first.message.content.unwrap_or_default())
      });
    }
    else {
      let status = response.status();
      log::error!("Error getting response from {}: {:?}", config.provider, status);
      return Ok(LLMResponse {content: format!("Error message for connecting to {}: {}", config.provider, status)});
    }
  }
}
