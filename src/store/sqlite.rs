//! SQLite storage backend
//!
//! Persistent storage through an sqlx connection pool. The schema lives in
//! `migrations/` and is embedded at build time.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::{NameRecord, NameStore, StoreError};
use crate::config::Config;

/// SQLite name store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a pool from configuration, applying migrations when enabled.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database");

        let store = Self::from_pool(pool);
        if config.run_migrations {
            store.run_migrations().await?;
        }
        Ok(store)
    }

    /// Open a private in-memory database with the schema applied.
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::from_pool(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    /// Create from an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply the embedded migrations; already-applied ones are skipped.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations complete");
        Ok(())
    }

    /// Get the connection pool for direct access if needed
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl NameStore for SqliteStore {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn list(&self) -> Result<Vec<NameRecord>, StoreError> {
        let names = sqlx::query_as::<_, NameRecord>(
            "SELECT id, name, created_at FROM names ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = names.len(), "Fetched names");
        Ok(names)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, name: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO names (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }
}
