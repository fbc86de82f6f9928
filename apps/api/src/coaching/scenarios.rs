//! Scenario registry: the closed set of role-play templates and their metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coaching::CoachError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    JobInterview,
    NetworkingEvent,
    SalaryNegotiation,
    TeamPresentation,
    DifficultConversation,
}

/// Static metadata for one scenario kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTemplate {
    pub id: ScenarioKind,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    /// Reward amount credited on completion.
    pub xp_reward: u32,
}

/// Registry order is the listing order.
pub static SCENARIOS: &[ScenarioTemplate] = &[
    ScenarioTemplate {
        id: ScenarioKind::JobInterview,
        title: "Job Interview Practice",
        description: "Practice common interview questions and get feedback on your responses",
        difficulty: Difficulty::Intermediate,
        xp_reward: 25,
    },
    ScenarioTemplate {
        id: ScenarioKind::NetworkingEvent,
        title: "Networking Event Simulation",
        description: "Practice introducing yourself and making professional connections",
        difficulty: Difficulty::Beginner,
        xp_reward: 15,
    },
    ScenarioTemplate {
        id: ScenarioKind::SalaryNegotiation,
        title: "Salary Negotiation",
        description: "Learn how to negotiate salary and benefits effectively",
        difficulty: Difficulty::Advanced,
        xp_reward: 35,
    },
    ScenarioTemplate {
        id: ScenarioKind::TeamPresentation,
        title: "Team Presentation",
        description: "Practice presenting ideas to colleagues and stakeholders",
        difficulty: Difficulty::Intermediate,
        xp_reward: 20,
    },
    ScenarioTemplate {
        id: ScenarioKind::DifficultConversation,
        title: "Difficult Conversation",
        description: "Handle challenging workplace conversations with confidence",
        difficulty: Difficulty::Advanced,
        xp_reward: 30,
    },
];

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::JobInterview,
        ScenarioKind::NetworkingEvent,
        ScenarioKind::SalaryNegotiation,
        ScenarioKind::TeamPresentation,
        ScenarioKind::DifficultConversation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::JobInterview => "job_interview",
            ScenarioKind::NetworkingEvent => "networking_event",
            ScenarioKind::SalaryNegotiation => "salary_negotiation",
            ScenarioKind::TeamPresentation => "team_presentation",
            ScenarioKind::DifficultConversation => "difficult_conversation",
        }
    }

    pub fn template(&self) -> &'static ScenarioTemplate {
        match self {
            ScenarioKind::JobInterview => &SCENARIOS[0],
            ScenarioKind::NetworkingEvent => &SCENARIOS[1],
            ScenarioKind::SalaryNegotiation => &SCENARIOS[2],
            ScenarioKind::TeamPresentation => &SCENARIOS[3],
            ScenarioKind::DifficultConversation => &SCENARIOS[4],
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoachError::UnknownScenario(s.to_string()))
    }
}
