//! Progress: level and XP stats derived from the session bag. Read-only.

use serde::Serialize;

use crate::coaching::scenarios::SCENARIOS;
use crate::sessions::bag::{ActivityEntry, SessionBag};

pub const XP_PER_LEVEL: u32 = 100;
const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub level: u32,
    pub total_xp: u32,
    pub xp_to_next_level: u32,
    pub scenarios_completed: usize,
    pub communication_xp: u32,
    pub recent_activities: Vec<ActivityEntry>,
}

/// Level is `total_xp / 100`, never below 1.
pub fn progress(bag: &SessionBag) -> Progress {
    let total_xp = bag.total_xp();

    let communication: Vec<&ActivityEntry> = bag
        .activity_history
        .iter()
        .filter(|a| is_communication_activity(&a.title))
        .collect();

    Progress {
        level: (total_xp / XP_PER_LEVEL).max(1),
        total_xp,
        xp_to_next_level: XP_PER_LEVEL - (total_xp % XP_PER_LEVEL),
        scenarios_completed: communication.len(),
        communication_xp: communication.iter().map(|a| a.xp).sum(),
        // activity_history is newest-first, so this is most recent first
        recent_activities: communication
            .into_iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect(),
    }
}

fn is_communication_activity(title: &str) -> bool {
    let title = title.to_lowercase();
    title.contains("communication")
        || SCENARIOS
            .iter()
            .any(|s| title.contains(&s.title.to_lowercase()))
}
