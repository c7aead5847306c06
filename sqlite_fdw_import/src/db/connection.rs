//! Database connection handling
//!
//! This module opens the SQLite database whose catalog is imported.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;

use crate::config::SourceConfig;
use crate::error::{Error, Result};

/// Connection to the SQLite source database
#[derive(Debug, Clone)]
pub struct SqliteSource {
    pool: SqlitePool,
    database: String,
}

impl SqliteSource {
    /// Open the configured SQLite database, which must already exist
    pub async fn connect(config: &SourceConfig) -> Result<Self> {
        let pool_size = config.pool_size.unwrap_or(1);
        let timeout_seconds = config.timeout_seconds.unwrap_or(30);

        let options = SqliteConnectOptions::new()
            .filename(&config.database)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(Duration::from_secs(timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                Error::DatabaseError(format!(
                    "Can't open sqlite database {}: {}",
                    config.database, e
                ))
            })?;

        tracing::debug!(database = %config.database, "Opened sqlite database");

        Ok(Self::from_pool(pool, &config.database))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool, database: &str) -> Self {
        Self {
            pool,
            database: database.to_string(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!(database = %self.database, "Closed sqlite database");
    }
}
