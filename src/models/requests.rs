//! Request DTOs for the names API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{ApiError, Result, NAME_REQUIRED_MESSAGE};

/// Request body for POST /api/names
///
/// `name` is optional at the decoding layer so that a missing field is
/// reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNameRequest {
    /// The name to store
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateNameRequest {
    /// Creates a request carrying the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Validates the request and returns the trimmed name to persist.
    pub fn validate(&self) -> Result<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::Validation(NAME_REQUIRED_MESSAGE.to_string()))
    }
}
