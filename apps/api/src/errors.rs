use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::story::ComposeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MalformedReply(detail) => {
                tracing::error!("Malformed model reply: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_REPLY",
                    "The AI response was malformed.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "The AI model could not process the image.".to_string(),
                )
            }
            AppError::Compose(ComposeError::Photo(e)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_IMAGE",
                format!("The uploaded file is not a readable image: {e}"),
            ),
            AppError::Compose(e) => {
                tracing::error!("Composition error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPOSE_ERROR",
                    "Failed to create the story image.".to_string(),
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
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("No image file was uploaded.".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_llm_error_maps_to_internal() {
        let response = AppError::Llm("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unreadable_photo_maps_to_bad_request() {
        let decode_err = image::load_from_memory(b"definitely not an image").unwrap_err();
        let response = AppError::Compose(ComposeError::Photo(decode_err)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
