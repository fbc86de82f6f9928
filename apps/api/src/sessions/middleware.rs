use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::sessions::store::{Session, SessionStore};

/// Request and response header carrying the opaque session id.
pub const SESSION_HEADER: &str = "x-session-id";

fn requested_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
}

async fn run_with(session: Session, echo: bool, mut request: Request, next: Next) -> Response {
    let id = session.id;
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;
    if echo {
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            response.headers_mut().insert(SESSION_HEADER, value);
        }
    }
    response
}

/// For routes that write to the bag: resolves (or creates) the caller's
/// session, stores it in the request extensions and echoes its id back.
pub async fn attach_session(
    State(store): State<SessionStore>,
    request: Request,
    next: Next,
) -> Response {
    let session = store.resolve(requested_id(request.headers()));
    run_with(session, true, request, next).await
}

/// For routes that only read or clear the bag: uses the caller's live session
/// when there is one, otherwise a detached blank session. Never creates a
/// stored session, and only echoes ids that exist.
pub async fn peek_session(
    State(store): State<SessionStore>,
    request: Request,
    next: Next,
) -> Response {
    match store.lookup(requested_id(request.headers())) {
        Some(session) => run_with(session, true, request, next).await,
        None => run_with(Session::detached(), false, request, next).await,
    }
}
