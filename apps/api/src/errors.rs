use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::parser::ParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as a flat `{"error": <message>}` body; a response is
/// either a complete record or this object, never a mix.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("File too large (max {0} bytes)")]
    PayloadTooLarge(usize),

    #[error("Could not extract text from PDF")]
    Extraction,

    #[error("Error processing file: {0}")]
    Processing(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::NoText => AppError::Extraction,
            ParseError::Io(e) => AppError::Processing(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::Extraction => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::Processing(msg) => {
                tracing::error!("Processing error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
