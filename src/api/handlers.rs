//! API Handlers
//!
//! HTTP request handlers for the names endpoints.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info};

use crate::config::Config;
use crate::error::{ApiError, Result, INTERNAL_ERROR_MESSAGE};
use crate::models::{CreateNameRequest, CreateNameResponse, NamesListResponse};
use crate::store::{NameStore, SqliteStore, StoreError};

/// Application state shared across all handlers.
///
/// Holds no mutable state of its own; the store handles its own
/// synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway
    pub store: Arc<dyn NameStore>,
    /// Configuration resolved at startup
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<dyn NameStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the SQLite pool named by `DATABASE_URL`.
    pub async fn from_config(config: Config) -> std::result::Result<Self, StoreError> {
        let store = SqliteStore::connect(&config).await?;
        Ok(Self::new(Arc::new(store), config))
    }

    /// Maps a store failure to the 500 response, hiding the raw message
    /// unless configured otherwise.
    fn store_error(&self, err: StoreError) -> ApiError {
        error!(error = %err, "Store operation failed");
        if self.config.expose_store_errors {
            ApiError::Store(err.to_string())
        } else {
            ApiError::Store(INTERNAL_ERROR_MESSAGE.to_string())
        }
    }
}

/// Handler for GET /api/names
///
/// Returns every stored name, newest first.
pub async fn list_names_handler(State(state): State<AppState>) -> Result<Json<NamesListResponse>> {
    let names = state
        .store
        .list()
        .await
        .map_err(|e| state.store_error(e))?;

    Ok(Json(NamesListResponse::new(names)))
}

/// Handler for POST /api/names
///
/// Validates the body and stores the trimmed name.
pub async fn create_name_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateNameRequest>, JsonRejection>,
) -> Result<Json<CreateNameResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let name = req.validate()?;

    let id = state
        .store
        .insert(name)
        .await
        .map_err(|e| state.store_error(e))?;

    info!(id, "Name added");
    Ok(Json(CreateNameResponse::new(id)))
}

/// Catch-all for unmatched method/path pairs
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
