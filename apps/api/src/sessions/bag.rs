use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coaching::state::ScenarioSession;
use crate::models::profile::UserProfile;

/// One line of the user's activity feed. The feed is kept newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub time: DateTime<Utc>,
}

/// Everything the server remembers about one client between requests.
/// A missing field means "not started yet", never corruption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionBag {
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    pub user_name: Option<String>,
    pub user_profile: Option<UserProfile>,
    /// `None` until the first credit lands.
    pub user_xp: Option<u32>,
    pub activity_history: Vec<ActivityEntry>,
    pub current_scenario: Option<ScenarioSession>,
}

impl SessionBag {
    pub fn total_xp(&self) -> u32 {
        self.user_xp.unwrap_or(0)
    }

    pub fn credit_xp(&mut self, xp: u32) -> u32 {
        let total = self.total_xp().saturating_add(xp);
        self.user_xp = Some(total);
        total
    }

    pub fn record_activity(&mut self, entry: ActivityEntry) {
        self.activity_history.insert(0, entry);
    }
}
