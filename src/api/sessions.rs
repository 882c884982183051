use crate::session::SessionRegistry;
use crate::store::CollectionKind;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// State for session lifecycle routes.
#[derive(Clone)]
pub struct SessionAppState {
    pub registry: Arc<SessionRegistry>,
}

/// Response for a newly created session
#[derive(Serialize, Deserialize)]
pub struct CreateSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Session info with per-collection counts (the demo's KPI tiles)
#[derive(Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "cleanReports")]
    pub clean_reports: usize,
    pub lostfound: usize,
    pub alerts: usize,
    pub broadcasts: usize,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create session API router
pub fn create_session_router(state: SessionAppState) -> Router {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(session_info).delete(end_session))
        .with_state(Arc::new(state))
}

/// POST /api/sessions - Create a new session with a freshly seeded store
async fn create_session(State(state): State<Arc<SessionAppState>>) -> Json<CreateSessionResponse> {
    let session = state.registry.create();

    info!(session_id = %session.id, "Session created");

    Json(CreateSessionResponse {
        session_id: session.id,
        created_at: session.created_at.to_rfc3339(),
    })
}

/// GET /api/sessions/:id - Session metadata plus per-collection counts
async fn session_info(
    State(state): State<Arc<SessionAppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionInfo>, SessionError> {
    let session = state.registry.info(&id).ok_or(SessionError::NotFound)?;
    let handle = state.registry.get(&id).ok_or(SessionError::NotFound)?;
    let store = handle.lock().expect("store lock poisoned");

    Ok(Json(SessionInfo {
        session_id: session.id,
        created_at: session.created_at.to_rfc3339(),
        clean_reports: store.len(CollectionKind::CleanReports),
        lostfound: store.len(CollectionKind::LostFound),
        alerts: store.len(CollectionKind::Alerts),
        broadcasts: store.len(CollectionKind::Broadcasts),
    }))
}

/// DELETE /api/sessions/:id - End a session, discarding its store
async fn end_session(
    State(state): State<Arc<SessionAppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, SessionError> {
    if !state.registry.end(&id) {
        return Err(SessionError::NotFound);
    }

    info!(session_id = %id, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}

/// Session API error types
enum SessionError {
    NotFound,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            SessionError::NotFound => (StatusCode::NOT_FOUND, "Session not found"),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}
