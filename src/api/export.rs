use crate::session::SessionRegistry;
use crate::snapshot::{Snapshot, EXPORT_FILE_NAME};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// State for the export route.
#[derive(Clone)]
pub struct ExportAppState {
    pub registry: Arc<SessionRegistry>,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create export API router
pub fn create_export_router(state: ExportAppState) -> Router {
    Router::new()
        .route("/api/sessions/:id/export", get(export_snapshot))
        .with_state(Arc::new(state))
}

/// GET /api/sessions/:id/export - Download all four collections as one JSON
/// document. Read-only; the store is unchanged.
async fn export_snapshot(
    State(state): State<Arc<ExportAppState>>,
    Path(id): Path<String>,
) -> Result<Response, ExportError> {
    let handle = state.registry.get(&id).ok_or(ExportError::SessionNotFound)?;

    let snapshot = {
        let store = handle.lock().expect("store lock poisoned");
        Snapshot::from_store(&store)
    };

    let body = snapshot.to_json().map_err(|e| {
        error!(session_id = %id, error = %e, "Failed to serialize export snapshot");
        ExportError::Serialize
    })?;

    info!(
        session_id = %id,
        records = snapshot.record_count(),
        "Snapshot exported"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, body).into_response())
}

/// Export API error types
enum ExportError {
    SessionNotFound,
    Serialize,
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ExportError::SessionNotFound => (StatusCode::NOT_FOUND, "Session not found"),
            ExportError::Serialize => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serialize snapshot",
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}
