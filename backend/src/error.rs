//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to HTTP responses. The wire shape is a flat
//! `{"error": "<message>"}` object; messages are suitable for direct
//! user display.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use food4mood_shared::models::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Missing or unusable provider credential. Fatal for the request,
    /// never retried.
    #[error("{0}")]
    Configuration(String),

    /// Provider call or response parse failure, with the underlying
    /// detail attached.
    #[error("Failed to get recommendations from the AI. {0}")]
    Provider(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, format!("Validation error: {}", msg))
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ApiError::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            ApiError::Provider(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
