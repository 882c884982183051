use crate::record::{Alert, CleanlinessReport, HeatmapPoint, LostFoundItem, Record, ValidationError};
use crate::session::SessionRegistry;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// State shared by the devotee submission and view routes.
#[derive(Clone)]
pub struct ReportsAppState {
    pub registry: Arc<SessionRegistry>,
}

/// Request to file a cleanliness report
#[derive(Deserialize)]
pub struct CleanlinessRequest {
    pub location: String,
    pub issue: String,
}

/// Request to report a lost item
#[derive(Deserialize)]
pub struct LostFoundRequest {
    pub item: String,
    #[serde(default)]
    pub desc: String,
    pub location: String,
}

/// Request to trigger an SOS alert. All fields optional; omitted ones take
/// the demo defaults.
#[derive(Default, Deserialize)]
pub struct SosRequest {
    pub from: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

/// Query parameters for list views
#[derive(Deserialize)]
pub struct ViewParams {
    /// Maximum number of records to return (newest first)
    pub limit: Option<usize>,
}

/// One record in a view response, tagged with its true storage position.
///
/// Views are newest-first while storage is oldest-first; clients address a
/// record (e.g. to resolve an alert) by this position and must re-derive it
/// from a fresh listing after every mutation.
#[derive(Serialize, Deserialize)]
pub struct Positioned<T> {
    pub position: usize,
    #[serde(flatten)]
    pub record: T,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create devotee API router
pub fn create_reports_router(state: ReportsAppState) -> Router {
    Router::new()
        .route(
            "/api/sessions/:id/cleanliness",
            post(submit_cleanliness).get(list_cleanliness),
        )
        .route(
            "/api/sessions/:id/lostfound",
            post(submit_lostfound).get(list_lostfound),
        )
        .route("/api/sessions/:id/sos", post(send_sos))
        .route("/api/sessions/:id/heatmap", get(heatmap))
        .with_state(Arc::new(state))
}

/// POST /api/sessions/:id/cleanliness - File a cleanliness report
async fn submit_cleanliness(
    State(state): State<Arc<ReportsAppState>>,
    Path(id): Path<String>,
    Json(request): Json<CleanlinessRequest>,
) -> Result<Json<Record>, ReportError> {
    let handle = state.registry.get(&id).ok_or(ReportError::SessionNotFound)?;
    let mut store = handle.lock().expect("store lock poisoned");

    let stored = store
        .append(Record::Clean(CleanlinessReport {
            location: request.location,
            issue: request.issue,
            time: String::new(),
        }))
        .map_err(ReportError::Validation)?;

    info!(session_id = %id, "Cleanliness report submitted");
    Ok(Json(stored))
}

/// GET /api/sessions/:id/cleanliness - Reports, newest first
async fn list_cleanliness(
    State(state): State<Arc<ReportsAppState>>,
    Path(id): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Vec<Positioned<CleanlinessReport>>>, ReportError> {
    let handle = state.registry.get(&id).ok_or(ReportError::SessionNotFound)?;
    let store = handle.lock().expect("store lock poisoned");

    Ok(Json(recent_view(store.clean_reports(), params.limit)))
}

/// POST /api/sessions/:id/lostfound - Report a lost item
async fn submit_lostfound(
    State(state): State<Arc<ReportsAppState>>,
    Path(id): Path<String>,
    Json(request): Json<LostFoundRequest>,
) -> Result<Json<Record>, ReportError> {
    let handle = state.registry.get(&id).ok_or(ReportError::SessionNotFound)?;
    let mut store = handle.lock().expect("store lock poisoned");

    let stored = store
        .append(Record::LostFound(LostFoundItem {
            item: request.item,
            desc: request.desc,
            location: request.location,
            time: String::new(),
        }))
        .map_err(ReportError::Validation)?;

    info!(session_id = %id, "Lost item reported");
    Ok(Json(stored))
}

/// GET /api/sessions/:id/lostfound - Lost items, newest first
async fn list_lostfound(
    State(state): State<Arc<ReportsAppState>>,
    Path(id): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Vec<Positioned<LostFoundItem>>>, ReportError> {
    let handle = state.registry.get(&id).ok_or(ReportError::SessionNotFound)?;
    let store = handle.lock().expect("store lock poisoned");

    Ok(Json(recent_view(store.lostfound(), params.limit)))
}

/// POST /api/sessions/:id/sos - Trigger an SOS alert
///
/// The body is optional; omitted fields take the demo defaults so a bare
/// button press still raises a complete alert.
async fn send_sos(
    State(state): State<Arc<ReportsAppState>>,
    Path(id): Path<String>,
    request: Option<Json<SosRequest>>,
) -> Result<Json<Record>, ReportError> {
    let handle = state.registry.get(&id).ok_or(ReportError::SessionNotFound)?;
    let mut store = handle.lock().expect("store lock poisoned");

    let request = request.map(|Json(r)| r).unwrap_or_default();
    let stored = store
        .append(Record::Alert(Alert {
            kind: "SOS".to_string(),
            from: request.from.unwrap_or_else(|| "DemoUser".to_string()),
            location: request.location.unwrap_or_else(|| "Sector X".to_string()),
            time: String::new(),
            message: request
                .message
                .unwrap_or_else(|| "Demo SOS triggered".to_string()),
        }))
        .map_err(ReportError::Validation)?;

    info!(session_id = %id, "SOS alert raised");
    Ok(Json(stored))
}

/// GET /api/sessions/:id/heatmap - The static heatmap sample points
async fn heatmap(
    State(state): State<Arc<ReportsAppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HeatmapPoint>>, ReportError> {
    let handle = state.registry.get(&id).ok_or(ReportError::SessionNotFound)?;
    let store = handle.lock().expect("store lock poisoned");

    Ok(Json(store.heatmap_points().to_vec()))
}

/// Newest-first view over `records`, keeping each record's storage position.
pub(crate) fn recent_view<T: Clone>(records: &[T], limit: Option<usize>) -> Vec<Positioned<T>> {
    records
        .iter()
        .cloned()
        .enumerate()
        .rev()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(position, record)| Positioned { position, record })
        .collect()
}

/// Devotee API error types
enum ReportError {
    SessionNotFound,
    Validation(ValidationError),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ReportError::SessionNotFound => {
                (StatusCode::NOT_FOUND, "Session not found".to_string())
            }
            ReportError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
