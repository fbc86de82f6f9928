//! The scenario state machine: introduction → active → complete.
//!
//! The coach owns no session state. Every operation borrows the caller's
//! `SessionBag` mutably for its duration; per-session serialization is the
//! hosting layer's job (see `sessions::store`).

use chrono::Utc;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::info;

use crate::coaching::prompts::{
    QUICK_TIPS, SCENARIO_FEEDBACK_FALLBACK, SCENARIO_FEEDBACK_PROMPT, SCENARIO_INTRO_FALLBACK,
    SCENARIO_INTRO_PROMPT, TONE_ANALYSIS_FALLBACK, TONE_ANALYSIS_PROMPT, TOPIC_TIP_PROMPT,
};
use crate::coaching::scenarios::{ScenarioKind, ScenarioTemplate};
use crate::coaching::state::{ScenarioSession, Stage, TurnRecord};
use crate::coaching::CoachError;
use crate::llm_client::prompts::render;
use crate::llm_client::Enricher;
use crate::sessions::bag::{ActivityEntry, SessionBag};

/// A scenario completes on the turn that brings its count to this value.
pub const TURNS_PER_SCENARIO: usize = 4;
pub const DEFAULT_USER_NAME: &str = "Student";

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioStart {
    pub scenario: &'static ScenarioTemplate,
    pub introduction: String,
    pub stage: Stage,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioTurn {
    pub coach_response: String,
    pub scenario_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_earned: Option<u32>,
    pub stage: Stage,
}

#[derive(Clone)]
pub struct ScenarioCoach {
    enricher: Enricher,
}

impl ScenarioCoach {
    pub fn new(enricher: Enricher) -> Self {
        Self { enricher }
    }

    /// Starts `scenario_type` for `user_name`, replacing any unfinished scenario.
    pub async fn start(
        &self,
        bag: &mut SessionBag,
        scenario_type: &str,
        user_name: &str,
    ) -> Result<ScenarioStart, CoachError> {
        let scenario_type = scenario_type.trim();
        if scenario_type.is_empty() {
            return Err(CoachError::Validation(
                "No scenario type provided".to_string(),
            ));
        }
        let kind: ScenarioKind = scenario_type.parse()?;
        let template = kind.template();

        let user_name = match user_name.trim() {
            "" => DEFAULT_USER_NAME,
            name => name,
        };

        let mut scenario = ScenarioSession::new(kind, user_name);

        let prompt = render(
            SCENARIO_INTRO_PROMPT,
            &[("title", template.title), ("user_name", user_name)],
        );
        let introduction = self
            .enricher
            .enrich(&prompt)
            .await
            .or_fallback(render(SCENARIO_INTRO_FALLBACK, &[("title", template.title)]));

        scenario.stage = Stage::Active;
        if let Some(previous) = bag.current_scenario.replace(scenario) {
            info!(
                "Replaced unfinished {} scenario after {} turns",
                previous.scenario_type,
                previous.turns.len()
            );
        }
        info!("Started {kind} scenario for {user_name}");

        Ok(ScenarioStart {
            scenario: template,
            introduction,
            stage: Stage::Active,
        })
    }

    /// Records one user turn and returns the coach's feedback. The turn that
    /// reaches `TURNS_PER_SCENARIO` completes the scenario, credits its reward
    /// and removes it from the bag.
    pub async fn continue_scenario(
        &self,
        bag: &mut SessionBag,
        user_text: &str,
    ) -> Result<ScenarioTurn, CoachError> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Err(CoachError::Validation("No response provided".to_string()));
        }

        let scenario = bag
            .current_scenario
            .as_mut()
            .ok_or(CoachError::NoActiveScenario)?;
        let template = scenario.scenario_type.template();

        let turn = (scenario.turns.len() + 1).to_string();
        let max_turns = TURNS_PER_SCENARIO.to_string();
        let prompt = render(
            SCENARIO_FEEDBACK_PROMPT,
            &[
                ("title", template.title),
                ("turn", turn.as_str()),
                ("max_turns", max_turns.as_str()),
                ("user_text", user_text),
            ],
        );
        let coach_response = self
            .enricher
            .enrich(&prompt)
            .await
            .or_fallback(SCENARIO_FEEDBACK_FALLBACK);

        scenario.turns.push(TurnRecord {
            user_text: user_text.to_string(),
            coach_response: coach_response.clone(),
            timestamp: Utc::now(),
        });

        if scenario.turns.len() < TURNS_PER_SCENARIO {
            return Ok(ScenarioTurn {
                coach_response,
                scenario_complete: false,
                xp_earned: None,
                stage: Stage::Active,
            });
        }

        let xp = template.xp_reward;
        bag.current_scenario = None;
        let total = bag.credit_xp(xp);
        bag.record_activity(ActivityEntry {
            title: format!("Completed {}", template.title),
            description: format!("Practiced communication skills and earned {xp} XP"),
            xp,
            time: Utc::now(),
        });
        info!("Completed {} scenario: +{xp} XP (total {total})", template.id);

        Ok(ScenarioTurn {
            coach_response,
            scenario_complete: true,
            xp_earned: Some(xp),
            stage: Stage::Complete,
        })
    }

    /// Drops the active scenario, if any. No reward is granted.
    pub fn reset(&self, bag: &mut SessionBag) -> bool {
        bag.current_scenario.take().is_some()
    }

    /// A topic-specific tip from the oracle, or a random canned tip without a topic.
    pub async fn quick_tip(&self, topic: Option<&str>) -> String {
        match topic.map(str::trim).filter(|t| !t.is_empty()) {
            Some(topic) => self
                .enricher
                .enrich(&render(TOPIC_TIP_PROMPT, &[("topic", topic)]))
                .await
                .or_fallback(QUICK_TIPS[0]),
            None => random_tip().to_string(),
        }
    }

    pub async fn tone_analysis(&self, text: &str) -> Result<String, CoachError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoachError::Validation("No text provided".to_string()));
        }
        Ok(self
            .enricher
            .enrich(&render(TONE_ANALYSIS_PROMPT, &[("text", text)]))
            .await
            .or_fallback(TONE_ANALYSIS_FALLBACK))
    }
}

/// Uniform pick from the canned tips.
pub fn random_tip() -> &'static str {
    QUICK_TIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUICK_TIPS[0])
}
