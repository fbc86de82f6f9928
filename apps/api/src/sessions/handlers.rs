//! Axum route handlers for session identity.

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::sessions::bag::ActivityEntry;
use crate::sessions::store::Session;
use crate::state::AppState;

/// XP granted the first time a session logs in.
pub const WELCOME_BONUS_XP: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub role: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: LoginUser,
}

/// POST /api/login
///
/// Records who the session belongs to. No credential check happens here.
pub async fn handle_login(
    Extension(session): Extension<Session>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = request.email.trim().to_string();
    let role = request.role.trim().to_string();
    if email.is_empty() || role.is_empty() {
        return Err(AppError::Validation(
            "Email and role are required".to_string(),
        ));
    }

    let name = display_name(&email);

    let mut bag = session.bag.lock().await;
    bag.user_email = Some(email.clone());
    bag.user_role = Some(role.clone());
    bag.user_name = Some(name.clone());
    if bag.user_xp.is_none() {
        bag.user_xp = Some(WELCOME_BONUS_XP);
    }
    bag.record_activity(ActivityEntry {
        title: "Welcome to MENTORA!".to_string(),
        description: format!("Joined as a {}", title_case(&role)),
        xp: WELCOME_BONUS_XP,
        time: Utc::now(),
    });

    info!("Session {} logged in as {role}", session.id);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: LoginUser { email, role, name },
    }))
}

/// POST /api/logout
///
/// Discards the whole session bag.
pub async fn handle_logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> StatusCode {
    state.sessions.remove(session.id);
    StatusCode::NO_CONTENT
}

/// Local part of an email address, or the whole string when there is no '@'.
fn display_name(email: &str) -> String {
    email
        .split_once('@')
        .map(|(local, _)| local)
        .unwrap_or(email)
        .to_string()
}

/// "career changer" → "Career Changer"
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
