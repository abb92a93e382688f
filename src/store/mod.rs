//! Store Module
//!
//! Persistence gateway for name records. The [`NameStore`] trait is the only
//! seam handlers see; [`SqliteStore`] backs production and [`MemoryStore`]
//! serves development and tests.

mod memory;
mod sqlite;

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migration(err.to_string())
    }
}

/// One persisted row of the `names` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct NameRecord {
    /// Identifier assigned by the store
    pub id: i64,
    /// Trimmed, non-empty name
    pub name: String,
    /// Insert time, defaulted by the store
    pub created_at: NaiveDateTime,
}

/// Storage backend for name records
///
/// Implementations must be safe to share across concurrent requests. Each
/// method is a single store round-trip.
#[async_trait]
pub trait NameStore: Send + Sync + Debug {
    /// All records, newest first (`created_at` then `id`, both descending)
    async fn list(&self) -> Result<Vec<NameRecord>, StoreError>;

    /// Insert an already-validated name and return its new id
    async fn insert(&self, name: &str) -> Result<i64, StoreError>;
}
