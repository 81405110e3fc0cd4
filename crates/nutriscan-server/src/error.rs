//! API error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use nutriscan_core::DetectError;

/// API-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request, typically a missing `image` field. Maps to 400.
    BadRequest(String),
    /// Decode or inference failure. Maps to 500 with the raw message.
    Internal(String),
}

impl From<DetectError> for ApiError {
    fn from(e: DetectError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
