//! Names API - A small HTTP service for storing and listing names
//!
//! Requests to `/api/names` pass an API-key gate before reaching a
//! persistence gateway backed by SQLite.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
