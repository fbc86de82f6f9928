//! The text oracle seam and the enrichment wrapper every caller goes through.
//!
//! Generated text is an enrichment, never a dependency: `Enricher::enrich`
//! bounds each call with a timeout and reports `Enrichment::Failed` instead of
//! an error, so callers always have a fallback path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::LlmError;

/// Accepts a free-text prompt and returns free text.
#[async_trait]
pub trait TextOracle: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Installed when no API key is configured. Every call fails immediately.
pub struct DisabledOracle;

#[async_trait]
impl TextOracle for DisabledOracle {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured)
    }
}

/// Outcome of one oracle call.
#[derive(Debug)]
pub enum Enrichment {
    Generated(String),
    Failed(LlmError),
}

impl Enrichment {
    /// Generated text, or `fallback` when the oracle failed.
    pub fn or_fallback(self, fallback: impl Into<String>) -> String {
        match self {
            Enrichment::Generated(text) => text,
            Enrichment::Failed(err) => {
                debug!("Using fallback text: {err}");
                fallback.into()
            }
        }
    }
}

/// Wraps a `TextOracle` with a hard timeout and empty-output detection.
#[derive(Clone)]
pub struct Enricher {
    oracle: Arc<dyn TextOracle>,
    timeout: Duration,
}

impl Enricher {
    pub fn new(oracle: Arc<dyn TextOracle>, timeout: Duration) -> Self {
        Self { oracle, timeout }
    }

    pub async fn enrich(&self, prompt: &str) -> Enrichment {
        let outcome = match tokio::time::timeout(self.timeout, self.oracle.generate(prompt)).await
        {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                debug!("Oracle produced {} chars", text.len());
                return Enrichment::Generated(text.trim().to_string());
            }
            Ok(Ok(_)) => LlmError::EmptyContent,
            Ok(Err(e)) => e,
            Err(_) => LlmError::Timeout(self.timeout),
        };

        warn!("Oracle enrichment failed, using fallback: {outcome}");
        Enrichment::Failed(outcome)
    }
}
