//! In-memory storage backend
//!
//! Keeps rows in a vector behind an async lock. Data is lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{NameRecord, NameStore, StoreError};

/// In-memory name store
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<NameRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameStore for MemoryStore {
    async fn list(&self) -> Result<Vec<NameRecord>, StoreError> {
        let mut names = self.rows.read().await.clone();
        names.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(names)
    }

    async fn insert(&self, name: &str) -> Result<i64, StoreError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |row| row.id + 1);
        rows.push(NameRecord {
            id,
            name: name.to_string(),
            created_at: Utc::now().naive_utc(),
        });
        debug!(id, "Inserted name into memory store");
        Ok(id)
    }
}
