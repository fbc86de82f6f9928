// Scenario Coach: scripted multi-turn role-play over the session bag.
// All generated text goes through llm_client::Enricher. An oracle outage
// degrades content, never availability.

pub mod coach;
pub mod handlers;
pub mod progress;
pub mod prompts;
pub mod scenarios;
pub mod state;

use thiserror::Error;

/// Structural coaching failures. Oracle failures never appear here.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("{0}")]
    Validation(String),

    #[error("Unknown scenario type: {0}")]
    UnknownScenario(String),

    #[error("No active scenario found")]
    NoActiveScenario,
}
