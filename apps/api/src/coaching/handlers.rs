//! Axum route handlers for the Communication Coach API.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::coaching::coach::{ScenarioStart, ScenarioTurn};
use crate::coaching::progress::{progress, Progress};
use crate::coaching::scenarios::{ScenarioTemplate, SCENARIOS};
use crate::errors::AppError;
use crate::sessions::store::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScenarioListResponse {
    pub scenarios: &'static [ScenarioTemplate],
}

#[derive(Debug, Deserialize)]
pub struct StartScenarioRequest {
    #[serde(default)]
    pub scenario_type: String,
    #[serde(default)]
    pub user_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    #[serde(default)]
    pub user_response: String,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub reset: bool,
}

#[derive(Debug, Deserialize)]
pub struct TipQuery {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: String,
}

#[derive(Debug, Deserialize)]
pub struct ToneRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ToneResponse {
    pub analysis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/communication/scenarios
pub async fn handle_list_scenarios() -> Json<ScenarioListResponse> {
    Json(ScenarioListResponse {
        scenarios: SCENARIOS,
    })
}

/// POST /api/communication/start
///
/// Starts a scenario in the caller's session, replacing any unfinished one.
pub async fn handle_start(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<StartScenarioRequest>,
) -> Result<Json<ScenarioStart>, AppError> {
    let mut bag = session.bag.lock().await;
    let start = state
        .coach
        .start(&mut bag, &request.scenario_type, &request.user_name)
        .await?;
    Ok(Json(start))
}

/// POST /api/communication/respond
///
/// One user turn. The fourth turn completes the scenario and credits XP.
pub async fn handle_respond(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<RespondRequest>,
) -> Result<Json<ScenarioTurn>, AppError> {
    let mut bag = session.bag.lock().await;
    let turn = state
        .coach
        .continue_scenario(&mut bag, &request.user_response)
        .await?;
    Ok(Json(turn))
}

/// POST /api/communication/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<ResetResponse> {
    let mut bag = session.bag.lock().await;
    Json(ResetResponse {
        reset: state.coach.reset(&mut bag),
    })
}

/// GET /api/communication/tip?topic=
pub async fn handle_tip(
    State(state): State<AppState>,
    Query(query): Query<TipQuery>,
) -> Json<TipResponse> {
    let tip = state.coach.quick_tip(query.topic.as_deref()).await;
    Json(TipResponse { tip })
}

/// GET /api/communication/progress
pub async fn handle_progress(Extension(session): Extension<Session>) -> Json<Progress> {
    let bag = session.bag.lock().await;
    Json(progress(&bag))
}

/// POST /api/communication/tone-analysis
pub async fn handle_tone_analysis(
    State(state): State<AppState>,
    Json(request): Json<ToneRequest>,
) -> Result<Json<ToneResponse>, AppError> {
    let analysis = state.coach.tone_analysis(&request.text).await?;
    Ok(Json(ToneResponse { analysis }))
}
