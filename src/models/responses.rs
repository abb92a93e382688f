//! Response DTOs for the names API
//!
//! Defines the structure of outgoing HTTP response bodies. Every body carries
//! a `success` flag.

use serde::Serialize;

use crate::store::NameRecord;

/// Message returned after a successful insert.
pub const NAME_ADDED_MESSAGE: &str = "Name added successfully";

/// Response body for GET /api/names
#[derive(Debug, Clone, Serialize)]
pub struct NamesListResponse {
    pub success: bool,
    /// All stored names, newest first
    pub names: Vec<NameRecord>,
}

impl NamesListResponse {
    pub fn new(names: Vec<NameRecord>) -> Self {
        Self {
            success: true,
            names,
        }
    }
}

/// Response body for POST /api/names
#[derive(Debug, Clone, Serialize)]
pub struct CreateNameResponse {
    pub success: bool,
    pub message: String,
    /// Identifier assigned by the store
    pub id: i64,
}

impl CreateNameResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            message: NAME_ADDED_MESSAGE.to_string(),
            id,
        }
    }
}

/// Error response body for all JSON error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
