//! Axum route handler for the career chat.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::guidance::intent::ChatIntent;
use crate::guidance::prompts::{ALL_INTERNSHIPS_INTRO, INTERVIEW_MENU};
use crate::matching::catalog::INTERNSHIPS;
use crate::matching::ranking::{rank_all, Recommendation};
use crate::sessions::store::Session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation<'static>>>,
}

impl ChatResponse {
    fn text(response: String) -> Self {
        Self {
            response,
            recommendations: None,
        }
    }
}

/// POST /api/chat
///
/// Routes the message by keyword. The session lock is released before any
/// oracle call.
pub async fn handle_chat(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let profile = session.bag.lock().await.user_profile.clone();
    let profile = profile.as_ref();
    let intent = ChatIntent::classify(message);
    debug!("Session {}: chat intent {:?}", session.id, intent);

    let companion = &state.companion;
    let response = match intent {
        ChatIntent::AllInternships => {
            let ranked = rank_all(
                state.scorer.as_ref(),
                &profile.cloned().unwrap_or_default(),
                INTERNSHIPS,
            );
            ChatResponse {
                response: ALL_INTERNSHIPS_INTRO.to_string(),
                recommendations: Some(ranked),
            }
        }
        ChatIntent::InterviewPractice { answer: None, .. } => {
            ChatResponse::text(INTERVIEW_MENU.to_string())
        }
        ChatIntent::InterviewPractice {
            kind,
            answer: Some(answer),
        } => ChatResponse::text(companion.interview_feedback(profile, kind, &answer).await),
        ChatIntent::Networking => {
            ChatResponse::text(companion.networking_strategy(profile).await)
        }
        ChatIntent::Trajectory => ChatResponse::text(companion.career_trajectory(profile).await),
        ChatIntent::General => ChatResponse::text(companion.guidance(profile, message).await),
    };

    Ok(Json(response))
}
