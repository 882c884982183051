use crate::assistant;
use crate::session::SessionRegistry;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// State for the ask route.
#[derive(Clone)]
pub struct AssistantAppState {
    pub registry: Arc<SessionRegistry>,
    /// Cosmetic "thinking" pause before the canned answer is returned
    pub answer_delay: Duration,
}

/// Request to ask the assistant a question
#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Canned answer response
#[derive(Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create assistant API router
pub fn create_assistant_router(state: AssistantAppState) -> Router {
    Router::new()
        .route("/api/sessions/:id/ask", post(ask))
        .with_state(Arc::new(state))
}

/// POST /api/sessions/:id/ask - Canned rule-table answer
///
/// The delay is purely presentational; the store lock is never taken, so a
/// slow answer cannot block other requests on the session.
async fn ask(
    State(state): State<Arc<AssistantAppState>>,
    Path(id): Path<String>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AskError> {
    if state.registry.get(&id).is_none() {
        return Err(AskError::SessionNotFound);
    }
    if request.question.is_empty() {
        return Err(AskError::EmptyQuestion);
    }

    tokio::time::sleep(state.answer_delay).await;

    let answer = assistant::answer(&request.question);
    info!(session_id = %id, "Question answered");

    Ok(Json(AskResponse {
        question: request.question,
        answer: answer.to_string(),
    }))
}

/// Assistant API error types
enum AskError {
    SessionNotFound,
    EmptyQuestion,
}

impl IntoResponse for AskError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AskError::SessionNotFound => (StatusCode::NOT_FOUND, "Session not found"),
            AskError::EmptyQuestion => (StatusCode::BAD_REQUEST, "Please type a question"),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}
