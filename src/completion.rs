//! Chat Completion Client
//!
//! Sends a transcript to a remote OpenAI-style chat-completion endpoint
//! and returns the reply text. One request, one response: no retries,
//! no streaming.

use crate::config::Config;
use crate::error::{VoxError, VoxResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Completion API response (OpenAI chat-completions shape)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the remote completion endpoint
#[derive(Clone)]
pub struct CompletionClient {
    url: String,
    model: String,
    token: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl CompletionClient {
    /// Create a client from config; fails when no API token is available
    pub fn new(config: &Config) -> VoxResult<Self> {
        let token = config.resolved_api_token().ok_or_else(|| {
            VoxError::Config(format!(
                "No API token configured (set {} or api_token in config.json)",
                crate::config::TOKEN_ENV_VAR
            ))
        })?;

        Ok(Self {
            url: config.api_url.clone(),
            model: config.api_model.clone(),
            token,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: Duration::from_secs(config.request_timeout),
        })
    }

    /// Send one user message and return the reply text
    pub async fn complete(&self, text: &str) -> VoxResult<String> {
        let client = reqwest::Client::new();
        let response = client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&request_body(
                &self.model,
                text,
                self.max_tokens,
                self.temperature,
            ))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ Completion API error ({}): {}", status, body_text);
            return Err(VoxError::Completion(format!(
                "HTTP {}: {}",
                status, body_text
            )));
        }

        debug!("💬 Completion raw body: {}", body_text);
        extract_reply(&body_text)
    }
}

/// Build the JSON request body for one user message
fn request_body(model: &str, text: &str, max_tokens: u32, temperature: f32) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            {
                "role": "user",
                "content": text
            }
        ],
        "stream": false,
        "max_tokens": max_tokens,
        "temperature": temperature
    })
}

/// Pull the reply text out of a completion response body
fn extract_reply(body: &str) -> VoxResult<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)?;

    if let Some(choice) = parsed.choices.into_iter().next() {
        return Ok(choice.message.content);
    }

    if let Some(error) = parsed.error {
        warn!("❌ Completion API returned error payload: {}", error);
        return Err(VoxError::Completion(error.to_string()));
    }

    Err(VoxError::Completion(
        "response contained no choices".to_string(),
    ))
}
