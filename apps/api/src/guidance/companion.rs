//! Career Companion: oracle-backed career advice with fixed fallbacks.

use crate::guidance::intent::InterviewKind;
use crate::guidance::prompts::{
    GUIDANCE_FALLBACK, GUIDANCE_PROMPT, INTERVIEW_FEEDBACK_FALLBACK, INTERVIEW_FEEDBACK_PROMPT,
    NETWORKING_FALLBACK, NETWORKING_PROMPT, TRAJECTORY_FALLBACK, TRAJECTORY_PROMPT,
};
use crate::llm_client::prompts::{render, CONCISE_INSTRUCTION};
use crate::llm_client::Enricher;
use crate::models::profile::{profile_context, UserProfile};

#[derive(Clone)]
pub struct CareerCompanion {
    enricher: Enricher,
}

impl CareerCompanion {
    pub fn new(enricher: Enricher) -> Self {
        Self { enricher }
    }

    pub async fn guidance(&self, profile: Option<&UserProfile>, message: &str) -> String {
        let context = profile_context(profile);
        let prompt = render(
            GUIDANCE_PROMPT,
            &[
                ("profile_context", context.as_str()),
                ("concise", CONCISE_INSTRUCTION),
                ("message", message),
            ],
        );
        self.enricher.enrich(&prompt).await.or_fallback(GUIDANCE_FALLBACK)
    }

    pub async fn interview_feedback(
        &self,
        profile: Option<&UserProfile>,
        kind: InterviewKind,
        answer: &str,
    ) -> String {
        let context = profile_context(profile);
        let prompt = render(
            INTERVIEW_FEEDBACK_PROMPT,
            &[
                ("profile_context", context.as_str()),
                ("interview_type", kind.label()),
                ("answer", answer),
            ],
        );
        self.enricher
            .enrich(&prompt)
            .await
            .or_fallback(INTERVIEW_FEEDBACK_FALLBACK)
    }

    pub async fn networking_strategy(&self, profile: Option<&UserProfile>) -> String {
        let context = profile_context(profile);
        let prompt = render(
            NETWORKING_PROMPT,
            &[
                ("profile_context", context.as_str()),
                ("industry_focus", industry_focus(profile)),
            ],
        );
        self.enricher.enrich(&prompt).await.or_fallback(NETWORKING_FALLBACK)
    }

    pub async fn career_trajectory(&self, profile: Option<&UserProfile>) -> String {
        let context = profile_context(profile);
        let prompt = render(
            TRAJECTORY_PROMPT,
            &[("profile_context", context.as_str())],
        );
        self.enricher.enrich(&prompt).await.or_fallback(TRAJECTORY_FALLBACK)
    }
}

/// Career goals, else degree, else "General".
fn industry_focus(profile: Option<&UserProfile>) -> &str {
    profile
        .and_then(|p| {
            [p.career_goals.trim(), p.degree.trim()]
                .into_iter()
                .find(|s| !s.is_empty())
        })
        .unwrap_or("General")
}
