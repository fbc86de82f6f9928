pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::coaching::handlers as coaching;
use crate::guidance::handlers as guidance;
use crate::matching::handlers as matching;
use crate::sessions::handlers as sessions;
use crate::sessions::middleware::{attach_session, peek_session};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Routes that may create a session
    let creating = Router::new()
        .route("/api/login", post(sessions::handle_login))
        .route("/api/submit-profile", post(matching::handle_submit_profile))
        .route("/api/communication/start", post(coaching::handle_start))
        .route_layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            attach_session,
        ));

    // Routes that only use an existing session
    let existing = Router::new()
        .route("/api/logout", post(sessions::handle_logout))
        .route("/api/chat", post(guidance::handle_chat))
        .route("/api/communication/respond", post(coaching::handle_respond))
        .route("/api/communication/reset", post(coaching::handle_reset))
        .route("/api/communication/progress", get(coaching::handle_progress))
        .route_layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            peek_session,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/communication/scenarios",
            get(coaching::handle_list_scenarios),
        )
        .route("/api/communication/tip", get(coaching::handle_tip))
        .route(
            "/api/communication/tone-analysis",
            post(coaching::handle_tone_analysis),
        )
        .merge(creating)
        .merge(existing)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::oracle::testing::ScriptedOracle;
    use crate::llm_client::DisabledOracle;
    use crate::sessions::middleware::SESSION_HEADER;

    fn app_with(oracle: Arc<dyn crate::llm_client::TextOracle>) -> Router {
        build_router(AppState::new(Config::default(), oracle))
    }

    fn app() -> Router {
        app_with(Arc::new(ScriptedOracle::always("Nice work, keep going.")))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        session: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Option<String>, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = session {
            builder = builder.header(SESSION_HEADER, id);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response: Response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let session_id = response
            .headers()
            .get(SESSION_HEADER)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, session_id, value)
    }

    async fn login(app: &Router, session: Option<&str>) -> String {
        let (status, issued, _) = send(
            app,
            "POST",
            "/api/login",
            session,
            Some(json!({ "email": "ada@example.com", "role": "student" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        issued.unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = app();
        let (status, session, body) = send(&app, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(session.is_none());
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_anonymous_reads_create_no_sessions() {
        let state = AppState::new(
            Config::default(),
            Arc::new(ScriptedOracle::always("ok")),
        );
        let store = state.sessions.clone();
        let app = build_router(state);

        for _ in 0..200 {
            send(&app, "GET", "/health", None, None).await;
        }
        send(&app, "GET", "/api/communication/tip", None, None).await;
        send(&app, "GET", "/api/communication/scenarios", None, None).await;
        let (_, issued, body) =
            send(&app, "GET", "/api/communication/progress", None, None).await;
        assert!(issued.is_none());
        assert_eq!(body["total_xp"], 0);
        let (status, _, _) = send(
            &app,
            "POST",
            "/api/communication/respond",
            None,
            Some(json!({ "user_response": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        send(&app, "POST", "/api/chat", None, Some(json!({ "message": "hi" }))).await;

        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_session_id_is_echoed_and_reused() {
        let app = app();
        let id = login(&app, None).await;
        let (_, echoed, _) =
            send(&app, "GET", "/api/communication/progress", Some(&id), None).await;
        assert_eq!(echoed.as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn test_unknown_session_id_gets_a_fresh_session() {
        let app = app();
        let stale = uuid::Uuid::new_v4().to_string();
        let issued = login(&app, Some(&stale)).await;
        assert_ne!(issued, stale);

        let (_, echoed, _) =
            send(&app, "GET", "/api/communication/progress", Some(&stale), None).await;
        assert!(echoed.is_none());
    }

    #[tokio::test]
    async fn test_full_scenario_over_http() {
        let app = app();
        let (status, session, body) = send(
            &app,
            "POST",
            "/api/communication/start",
            None,
            Some(json!({ "scenario_type": "job_interview", "user_name": "Ada" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stage"], "active");
        let id = session.unwrap();

        for turn in 1..=4 {
            let (status, _, body) = send(
                &app,
                "POST",
                "/api/communication/respond",
                Some(&id),
                Some(json!({ "user_response": format!("answer {turn}") })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            if turn < 4 {
                assert_eq!(body["scenario_complete"], false);
                assert!(body.get("xp_earned").is_none());
            } else {
                assert_eq!(body["scenario_complete"], true);
                assert_eq!(body["xp_earned"], 25);
                assert_eq!(body["stage"], "complete");
            }
        }

        let (status, _, body) = send(
            &app,
            "POST",
            "/api/communication/respond",
            Some(&id),
            Some(json!({ "user_response": "one more" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NO_ACTIVE_SCENARIO");

        let (_, _, body) = send(&app, "GET", "/api/communication/progress", Some(&id), None).await;
        assert_eq!(body["total_xp"], 25);
        assert_eq!(body["scenarios_completed"], 1);
        assert_eq!(body["communication_xp"], 25);
    }

    #[tokio::test]
    async fn test_unknown_scenario_is_rejected() {
        let app = app();
        let (status, _, body) = send(
            &app,
            "POST",
            "/api/communication/start",
            None,
            Some(json!({ "scenario_type": "dragon_taming" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_SCENARIO");
    }

    #[tokio::test]
    async fn test_login_grants_welcome_bonus_once() {
        let app = app();
        let login_body = json!({ "email": "ada@example.com", "role": "student" });
        let (status, session, body) =
            send(&app, "POST", "/api/login", None, Some(login_body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "ada");
        let id = session.unwrap();

        send(&app, "POST", "/api/login", Some(&id), Some(login_body)).await;

        let (_, _, body) = send(&app, "GET", "/api/communication/progress", Some(&id), None).await;
        assert_eq!(body["total_xp"], 10);
        assert_eq!(body["level"], 1);
        assert_eq!(body["scenarios_completed"], 0);
    }

    #[tokio::test]
    async fn test_logout_discards_session() {
        let app = app();
        let id = login(&app, None).await;

        let (status, _, _) = send(&app, "POST", "/api/logout", Some(&id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, echoed, body) =
            send(&app, "GET", "/api/communication/progress", Some(&id), None).await;
        assert!(echoed.is_none());
        assert_eq!(body["total_xp"], 0);
    }

    #[tokio::test]
    async fn test_submit_profile_returns_ranked_matches() {
        let app = app();
        let (status, _, body) = send(
            &app,
            "POST",
            "/api/submit-profile",
            None,
            Some(json!({
                "name": "Ada",
                "degree": "Computer Science",
                "skills": "python, sql, machine learning",
                "experience_level": "intermediate",
                "career_goals": "become a data scientist"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_name"], "Ada");
        let recs = body["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty() && recs.len() <= 5);
        let scores: Vec<u64> = recs
            .iter()
            .map(|r| r["match_score"].as_u64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert!(scores.iter().all(|s| *s > 20));
    }

    #[tokio::test]
    async fn test_chat_requires_message() {
        let app = app();
        let (status, _, body) =
            send(&app, "POST", "/api/chat", None, Some(json!({ "message": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chat_lists_all_internships() {
        let app = app();
        let (status, _, body) = send(
            &app,
            "POST",
            "/api/chat",
            None,
            Some(json!({ "message": "Show me more internships" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["recommendations"].as_array().unwrap().len(),
            crate::matching::catalog::INTERNSHIPS.len()
        );
    }

    #[tokio::test]
    async fn test_chat_falls_back_without_oracle() {
        let app = app_with(Arc::new(DisabledOracle));
        let (status, _, body) = send(
            &app,
            "POST",
            "/api/chat",
            None,
            Some(json!({ "message": "What should I study next?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["response"],
            crate::guidance::prompts::GUIDANCE_FALLBACK
        );
        assert!(body.get("recommendations").is_none());
    }

    #[tokio::test]
    async fn test_scenarios_are_listed() {
        let app = app();
        let (status, _, body) =
            send(&app, "GET", "/api/communication/scenarios", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scenarios"].as_array().unwrap().len(), 5);
    }
}
