// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use qanda_core::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Startup connection retry policy
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(2),
        }
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create SQLite connection pool with WAL mode and foreign keys enforced
///
/// Every in-memory connection is its own database, so in-memory URLs get a
/// single connection that is never closed.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(map_sqlx_error)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(10)
    };

    pool_options
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)
}

/// Create the pool, retrying while the store is unreachable
pub async fn connect_with_retry(database_url: &str, retry: &RetryConfig) -> Result<SqlitePool> {
    let max_attempts = retry.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match create_pool(database_url).await {
            Ok(pool) => {
                info!(attempt, "Database connection established");
                return Ok(pool);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    retry_in_ms = retry.delay.as_millis() as u64,
                    "Failed to connect to database, retrying"
                );
                tokio::time::sleep(retry.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
