//! PostgreSQL connection pool management

use std::time::Duration;

use board_common::{AppError, DatabaseConfig};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

/// Maximum idle time before a connection is closed
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
/// Maximum lifetime of a connection
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a new PostgreSQL connection pool
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await?;

    info!("Database pool ready");
    Ok(pool)
}

/// Create a connection pool from the DATABASE_* environment variables
pub async fn create_pool_from_env() -> Result<PgPool, AppError> {
    let config = DatabaseConfig::from_env()?;
    create_pool(&config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}
