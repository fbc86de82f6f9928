use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coaching::scenarios::ScenarioKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Created, opening not issued yet. Never outlives the start request.
    Introduction,
    Active,
    /// Terminal. Only ever reported; a completed scenario is removed from the bag.
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub user_text: String,
    pub coach_response: String,
    pub timestamp: DateTime<Utc>,
}

/// The single in-flight scenario of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSession {
    pub scenario_type: ScenarioKind,
    pub stage: Stage,
    pub user_name: String,
    pub turns: Vec<TurnRecord>,
    pub started_at: DateTime<Utc>,
}

impl ScenarioSession {
    pub fn new(scenario_type: ScenarioKind, user_name: impl Into<String>) -> Self {
        Self {
            scenario_type,
            stage: Stage::Introduction,
            user_name: user_name.into(),
            turns: Vec::new(),
            started_at: Utc::now(),
        }
    }
}
