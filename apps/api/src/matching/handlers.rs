//! Axum route handlers for profile submission and recommendations.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use tracing::info;

use crate::matching::catalog::INTERNSHIPS;
use crate::matching::degrees::{suggest_degrees, DegreeSuggestion};
use crate::matching::ranking::{recommend, Recommendation, DEFAULT_LIMIT, INCLUSION_THRESHOLD};
use crate::models::profile::UserProfile;
use crate::sessions::store::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitProfileResponse {
    pub recommendations: Vec<Recommendation<'static>>,
    pub degree_suggestions: &'static [DegreeSuggestion],
    pub user_name: String,
}

/// POST /api/submit-profile
///
/// Stores the profile in the session (replacing any earlier one) and returns
/// the top matches plus degree-path suggestions.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(profile): Json<UserProfile>,
) -> Json<SubmitProfileResponse> {
    let recommendations = recommend(
        state.scorer.as_ref(),
        &profile,
        INTERNSHIPS,
        DEFAULT_LIMIT,
        INCLUSION_THRESHOLD,
    );
    let degree_suggestions = suggest_degrees(&profile);
    let user_name = match profile.name.trim() {
        "" => "User".to_string(),
        name => name.to_string(),
    };

    info!(
        "Session {}: {} recommendations for profile",
        session.id,
        recommendations.len()
    );
    session.bag.lock().await.user_profile = Some(profile);

    Json(SubmitProfileResponse {
        recommendations,
        degree_suggestions,
        user_name,
    })
}
