use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::coaching::CoachError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Oracle failures have no variant: they are absorbed as fallback text before
/// reaching a handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("No active scenario")]
    NoActiveScenario,
}

impl From<CoachError> for AppError {
    fn from(err: CoachError) -> Self {
        match err {
            CoachError::Validation(msg) => AppError::Validation(msg),
            CoachError::UnknownScenario(id) => AppError::UnknownScenario(id),
            CoachError::NoActiveScenario => AppError::NoActiveScenario,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnknownScenario(id) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_SCENARIO",
                format!("Invalid scenario type: {id}"),
            ),
            AppError::NoActiveScenario => (
                StatusCode::CONFLICT,
                "NO_ACTIVE_SCENARIO",
                "No active scenario found".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coach_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(CoachError::NoActiveScenario),
            AppError::NoActiveScenario
        ));
        assert!(matches!(
            AppError::from(CoachError::UnknownScenario("x".to_string())),
            AppError::UnknownScenario(ref id) if id == "x"
        ));
        assert!(matches!(
            AppError::from(CoachError::Validation("missing".to_string())),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownScenario("x".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NoActiveScenario.into_response().status(),
            StatusCode::CONFLICT
        );
    }
}
