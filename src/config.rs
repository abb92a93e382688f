//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use thiserror::Error;

/// Errors raised while resolving configuration at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Server configuration parameters.
///
/// Resolved once at process start and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret expected in the `X-API-Key` header
    pub api_key: String,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of pooled database connections
    pub db_max_connections: u32,
    /// Apply the embedded schema migrations on startup
    pub run_migrations: bool,
    /// Pass raw store error messages through to clients on 500 responses
    pub expose_store_errors: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_KEY` - Shared secret for the authorization gate (required)
    /// - `DATABASE_URL` - SQLite URL (default: `sqlite://names.db?mode=rwc`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `RUN_MIGRATIONS` - Apply migrations on startup (default: true)
    /// - `EXPOSE_STORE_ERRORS` - Leak store messages in 500 bodies (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("API_KEY"))?;

        let defaults = Self::with_api_key(api_key);

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url.clone()),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            run_migrations: parse_var("RUN_MIGRATIONS").unwrap_or(defaults.run_migrations),
            expose_store_errors: parse_var("EXPOSE_STORE_ERRORS")
                .unwrap_or(defaults.expose_store_errors),
            ..defaults
        })
    }

    /// Creates a Config with default settings and the given secret.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            database_url: "sqlite://names.db?mode=rwc".to_string(),
            server_port: 3000,
            db_max_connections: 5,
            run_migrations: true,
            expose_store_errors: false,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
