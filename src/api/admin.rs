use crate::api::reports::{recent_view, Positioned, ViewParams};
use crate::auth::{require_passphrase, PassphraseError};
use crate::record::{Alert, Broadcast, Record, ValidationError};
use crate::session::SessionRegistry;
use crate::store::{CollectionKind, StoreError};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// State for the control-room API.
#[derive(Clone)]
pub struct AdminAppState {
    pub registry: Arc<SessionRegistry>,
    /// Shared secret required on every admin route
    pub passphrase: String,
}

/// Request to send a broadcast announcement
#[derive(Deserialize)]
pub struct BroadcastRequest {
    pub message: String,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create control-room API router. Every route checks the admin passphrase.
pub fn create_admin_router(state: AdminAppState) -> Router {
    Router::new()
        .route("/api/sessions/:id/alerts", get(list_alerts))
        .route(
            "/api/sessions/:id/alerts/:position",
            delete(resolve_alert),
        )
        .route(
            "/api/sessions/:id/broadcasts",
            post(send_broadcast).get(list_broadcasts),
        )
        .with_state(Arc::new(state))
}

/// GET /api/sessions/:id/alerts - Live alerts, newest first
///
/// Each alert carries its storage position for use with the resolve route.
async fn list_alerts(
    State(state): State<Arc<AdminAppState>>,
    Path(id): Path<String>,
    Query(params): Query<ViewParams>,
    headers: HeaderMap,
) -> Result<Json<Vec<Positioned<Alert>>>, AdminError> {
    require_passphrase(&headers, &state.passphrase)?;

    let handle = state.registry.get(&id).ok_or(AdminError::SessionNotFound)?;
    let store = handle.lock().expect("store lock poisoned");

    Ok(Json(recent_view(store.alerts(), params.limit)))
}

/// DELETE /api/sessions/:id/alerts/:position - Mark an alert resolved
///
/// `position` is the storage position reported by the most recent listing.
/// Positions after the removed one shift down, so the console re-lists
/// before resolving the next alert.
async fn resolve_alert(
    State(state): State<Arc<AdminAppState>>,
    Path((id, position)): Path<(String, usize)>,
    headers: HeaderMap,
) -> Result<Json<Record>, AdminError> {
    require_passphrase(&headers, &state.passphrase)?;

    let handle = state.registry.get(&id).ok_or(AdminError::SessionNotFound)?;
    let mut store = handle.lock().expect("store lock poisoned");

    let removed = store
        .remove_at(CollectionKind::Alerts, position)
        .map_err(AdminError::Store)?;

    info!(session_id = %id, position, "Alert marked resolved");
    Ok(Json(removed))
}

/// POST /api/sessions/:id/broadcasts - Send an announcement
async fn send_broadcast(
    State(state): State<Arc<AdminAppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<BroadcastRequest>,
) -> Result<Json<Record>, AdminError> {
    require_passphrase(&headers, &state.passphrase)?;

    let handle = state.registry.get(&id).ok_or(AdminError::SessionNotFound)?;
    let mut store = handle.lock().expect("store lock poisoned");

    let stored = store
        .append(Record::Broadcast(Broadcast {
            message: request.message,
            time: String::new(),
        }))
        .map_err(AdminError::Validation)?;

    info!(session_id = %id, "Broadcast sent");
    Ok(Json(stored))
}

/// GET /api/sessions/:id/broadcasts - Recent broadcasts, newest first
async fn list_broadcasts(
    State(state): State<Arc<AdminAppState>>,
    Path(id): Path<String>,
    Query(params): Query<ViewParams>,
    headers: HeaderMap,
) -> Result<Json<Vec<Positioned<Broadcast>>>, AdminError> {
    require_passphrase(&headers, &state.passphrase)?;

    let handle = state.registry.get(&id).ok_or(AdminError::SessionNotFound)?;
    let store = handle.lock().expect("store lock poisoned");

    Ok(Json(recent_view(store.broadcasts(), params.limit)))
}

/// Control-room API error types
enum AdminError {
    Unauthorized(PassphraseError),
    SessionNotFound,
    Validation(ValidationError),
    Store(StoreError),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AdminError::Unauthorized(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AdminError::SessionNotFound => {
                (StatusCode::NOT_FOUND, "Session not found".to_string())
            }
            AdminError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AdminError::Store(e) => (StatusCode::NOT_FOUND, e.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<PassphraseError> for AdminError {
    fn from(e: PassphraseError) -> Self {
        AdminError::Unauthorized(e)
    }
}
