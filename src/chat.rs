//! Minimal client for an OpenAI-compatible chat.completions endpoint (Groq by default).
//!
//! One call = one attempt against one model, requesting a strict JSON object.
//! Calls are instrumented and log model names, latencies and token usage (not contents).
//!
//! NOTE: We never log the API key and we keep body truncations short.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::RemoteSettings;
use crate::error::CoupletError;
use crate::remote::{AttemptError, ChatBackend};
use crate::util::trunc_for_log;

#[derive(Clone)]
pub struct GroqClient {
  client: reqwest::Client,
  api_key: String,
  pub base_url: String,
  pub temperature: f32,
}

impl std::fmt::Debug for GroqClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GroqClient")
      .field("base_url", &self.base_url)
      .field("temperature", &self.temperature)
      .finish_non_exhaustive()
  }
}

impl GroqClient {
  /// Build the client. Fails without touching the network when no credential is configured.
  pub fn new(settings: &RemoteSettings) -> Result<Self, CoupletError> {
    let api_key = settings
      .api_key
      .clone()
      .filter(|k| !k.trim().is_empty())
      .ok_or_else(|| CoupletError::config("GROQ_API_KEY environment variable is not set"))?;

    let client = reqwest::Client::builder()
      .timeout(settings.timeout)
      .build()
      .map_err(|e| CoupletError::config(format!("failed to build HTTP client: {e}")))?;

    Ok(Self {
      client,
      api_key,
      base_url: settings.base_url.clone(),
      temperature: settings.temperature,
    })
  }
}

impl ChatBackend for GroqClient {
  #[instrument(level = "info", skip(self, system, scenario), fields(model = %model))]
  async fn attempt(&self, model: &str, system: &str, scenario: &str) -> Result<Option<String>, AttemptError> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: model.to_string(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: system.into() },
        ChatMessageReq { role: "user".into(), content: scenario.into() },
      ],
      temperature: self.temperature,
      response_format: Some(ResponseFormat { r#type: "json_object".into() }),
    };

    let res = self.client.post(&url)
      .header(USER_AGENT, "ghalibify-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await
      .map_err(|e| AttemptError::Transport(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
      let body = res.text().await.map_err(|e| AttemptError::Transport(e.to_string()))?;
      let msg = extract_api_error(&body).unwrap_or_default();
      debug!(status = status.as_u16(), message = %msg, body = %trunc_for_log(&body, 300), "Chat completion rejected");
      return Err(AttemptError::Status { status: status.as_u16(), body });
    }

    let body: ChatCompletionResponse = res.json().await.map_err(|e| {
      if e.is_timeout() { AttemptError::Transport(e.to_string()) } else { AttemptError::Malformed(e.to_string()) }
    })?;
    if let Some(usage) = &body.usage {
      info!(prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "Chat usage");
    }

    Ok(body.choices.into_iter().next().and_then(|c| c.message.content))
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  response_format: Option<ResponseFormat>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }
#[derive(Serialize)]
struct ResponseFormat { #[serde(rename = "type")] r#type: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)] choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { #[serde(default)] content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an OpenAI-style error body.
fn extract_api_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  serde_json::from_str::<EWrap>(body).ok().map(|w| w.error.message)
}
