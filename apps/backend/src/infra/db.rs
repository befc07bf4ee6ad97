//! Database connection and schema bootstrap.

use std::future::Future;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Get database engine name for logging
fn db_engine(url: &str) -> &'static str {
    if url.starts_with("sqlite:") {
        "sqlite"
    } else if url.starts_with("postgres") {
        "postgresql"
    } else {
        "unknown"
    }
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Connect to `database_url` and bring the schema up to date.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.sqlx_logging(false);

    // every pooled connection to sqlite::memory: would be a separate database
    if is_sqlite_memory(database_url) {
        options.max_connections(1).min_connections(1);
    }

    let attempts = if is_sqlite_memory(database_url) {
        1
    } else {
        CONNECT_ATTEMPTS
    };

    let conn = retry_connection(
        || {
            let options = options.clone();
            async move { Database::connect(options).await.map_err(AppError::from) }
        },
        attempts,
        CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(engine = db_engine(database_url), "database connected");

    migration::migrate_up(&conn)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    Ok(conn)
}
