use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chess_core::PipelineError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Bad query string: {0}")]
    Query(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Pipeline(PipelineError::EmptyResult) => {
                tracing::warn!("Download failed: {self}");
            }
            _ => tracing::error!("Download failed: {self}"),
        }

        // Callers only ever see a generic message; detail stays in the log.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Invalid request" })),
        )
            .into_response()
    }
}
