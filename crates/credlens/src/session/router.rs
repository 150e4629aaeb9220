use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::history::{SessionId, SessionStore, SessionStoreError};
use super::service::{EvaluationRequest, EvaluationServiceError, LoanEvaluationService};
use crate::opinion::OpinionSource;
use crate::scoring::ApplicantProfile;

/// Router builder exposing HTTP endpoints for previews, sessions, and evaluations.
pub fn evaluation_router<O, S>(service: Arc<LoanEvaluationService<O, S>>) -> Router
where
    O: OpinionSource + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/preview", post(preview_handler::<O, S>))
        .route("/api/v1/sessions", post(start_session_handler::<O, S>))
        .route(
            "/api/v1/sessions/:session_id/evaluations",
            post(evaluate_handler::<O, S>),
        )
        .route(
            "/api/v1/sessions/:session_id/history",
            get(history_handler::<O, S>),
        )
        .with_state(service)
}

pub(crate) async fn preview_handler<O, S>(
    State(service): State<Arc<LoanEvaluationService<O, S>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    O: OpinionSource + 'static,
    S: SessionStore + 'static,
{
    match service.preview(&profile) {
        Ok(preview) => (StatusCode::OK, axum::Json(preview)).into_response(),
        Err(error) => error_response(EvaluationServiceError::InvalidInput(error)),
    }
}

pub(crate) async fn start_session_handler<O, S>(
    State(service): State<Arc<LoanEvaluationService<O, S>>>,
) -> Response
where
    O: OpinionSource + 'static,
    S: SessionStore + 'static,
{
    match service.start_session() {
        Ok(session_id) => (
            StatusCode::CREATED,
            axum::Json(json!({ "session_id": session_id })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn evaluate_handler<O, S>(
    State(service): State<Arc<LoanEvaluationService<O, S>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    O: OpinionSource + 'static,
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.evaluate(&id, request).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<O, S>(
    State(service): State<Arc<LoanEvaluationService<O, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    O: OpinionSource + 'static,
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.history(&id) {
        Ok(entries) => (
            StatusCode::OK,
            axum::Json(json!({ "session_id": id, "entries": entries })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: EvaluationServiceError) -> Response {
    let status = match &error {
        EvaluationServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EvaluationServiceError::Session(SessionStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        EvaluationServiceError::Session(SessionStoreError::Conflict(_)) => StatusCode::CONFLICT,
        EvaluationServiceError::Session(SessionStoreError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
