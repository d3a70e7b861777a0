use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Collaborator adapters map their failures into the matching variant so the
/// runner can report which external system broke. Implements `IntoResponse`
/// so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Job source error: {0}")]
    JobSource(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Submission error: {0}")]
    Submission(String),

    #[error("Sheet error: {0}")]
    Sheet(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "The automation configuration is invalid".to_string(),
                )
            }
            AppError::JobSource(msg) => {
                tracing::error!("Job source error: {msg}");
                (StatusCode::BAD_GATEWAY, "JOB_SOURCE_ERROR", msg.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Submission(msg) => {
                tracing::error!("Submission error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SUBMISSION_ERROR",
                    "The browser runner failed".to_string(),
                )
            }
            AppError::Sheet(msg) => {
                tracing::error!("Sheet error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SHEET_ERROR",
                    "Result logging failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
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
