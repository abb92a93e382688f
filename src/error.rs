//! Error types for the names API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message returned when the API key is missing or wrong.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid API key";

/// Message returned when a create request carries no usable name.
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required and cannot be empty";

/// Generic 500 message used when store errors are not exposed.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// == API Error Enum ==
/// Unified error type for the request pipeline.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or mismatched `X-API-Key`
    #[error("Unauthorized: Invalid API key")]
    Unauthorized,

    /// Request decoded but failed validation
    #[error("{0}")]
    Validation(String),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Persistence gateway failure
    #[error("{0}")]
    Store(String),

    /// No route matched
    #[error("Not Found")]
    NotFound,
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the request pipeline.
pub type Result<T> = std::result::Result<T, ApiError>;
