//! LLM Client: the single point of entry for all text-generation calls in MENTORA.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! Coaching and guidance code only ever sees the `TextOracle` trait, and only
//! through an `Enricher`, which turns every failure into a fallback.
//!
//! Model: claude-sonnet-4-5 (hardcoded)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod oracle;
pub mod prompts;

pub use oracle::{DisabledOracle, Enricher, Enrichment, TextOracle};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all oracle calls in MENTORA.
pub const MODEL: &str = "claude-sonnet-4-5";
/// Coaching replies are short conversational turns.
const MAX_TOKENS: u32 = 1024;
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),

    #[error("No LLM API key configured")]
    NotConfigured,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Concatenates every text block; the coach never asks for tool use.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API client backing the `TextOracle` used in production.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    /// Retries after the first attempt.
    max_retries: u32,
}

impl LlmClient {
    pub fn new(api_key: String, max_retries: u32) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(HTTP_TIMEOUT).build()?,
            api_key,
            max_retries,
        })
    }

    /// One initial attempt plus `max_retries` retries.
    fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.attempts() {
            if attempt > 0 {
                let delay = backoff(attempt);
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: self.max_retries,
        }))
    }
}

/// Exponential backoff before retry `attempt` (1-based): 500ms, 1s, 2s, ...
fn backoff(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    Duration::from_millis(500 * (1u64 << exponent))
}

#[async_trait]
impl TextOracle for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, prompts::COACH_SYSTEM).await?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(block_type: &str, text: Option<&str>) -> ContentBlock {
        ContentBlock {
            block_type: block_type.to_string(),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_response_text_joins_text_blocks() {
        let response = LlmResponse {
            content: vec![
                block("text", Some("Great start.")),
                block("tool_use", None),
                block("text", Some("Now try again.")),
            ],
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
            },
        };
        assert_eq!(response.text(), "Great start.\nNow try again.");
    }

    #[test]
    fn test_response_text_empty_without_text_blocks() {
        let response = LlmResponse {
            content: vec![block("tool_use", None)],
            usage: Usage {
                input_tokens: 1,
                output_tokens: 0,
            },
        };
        assert!(response.text().is_empty());
    }

    #[test]
    fn test_response_deserializes_from_api_shape() {
        let json = r#"{
            "content": [{"type": "text", "text": "Hello"}],
            "usage": {"input_tokens": 3, "output_tokens": 1}
        }"#;
        let response: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "Hello");
        assert_eq!(response.usage.output_tokens, 1);
    }

    #[test]
    fn test_retries_come_on_top_of_the_first_attempt() {
        let client = LlmClient::new("key".to_string(), 0).unwrap();
        assert_eq!(client.attempts(), 1);
        let client = LlmClient::new("key".to_string(), 2).unwrap();
        assert_eq!(client.attempts(), 3);
    }

    #[test]
    fn test_backoff_doubles_from_half_a_second() {
        assert_eq!(backoff(1), Duration::from_millis(500));
        assert_eq!(backoff(2), Duration::from_secs(1));
        assert_eq!(backoff(3), Duration::from_secs(2));
        assert_eq!(backoff(40), backoff(17));
    }
}
