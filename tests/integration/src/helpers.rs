//! Test helpers for integration tests
//!
//! Provides a database-backed service context with the schema applied.

use anyhow::Result;
use board_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use board_db::{create_pool, PgPool};
use board_service::{PostService, ServiceContext, SubredditService, UserService};

/// Schema shared with the board-db repository tests
pub const SCHEMA: &str = include_str!("../../../crates/board-db/tests/schema.sql");

/// A service context wired to the test database
pub struct TestBoard {
    pub pool: PgPool,
    pub ctx: ServiceContext,
}

impl TestBoard {
    /// Connect using the environment configuration and make sure the schema exists
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        // Tests share one process; only the first call installs the subscriber
        let _ = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env));

        let pool = create_pool(&config.database).await?;
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        let ctx = ServiceContext::from_pool(pool.clone());
        Ok(Self { pool, ctx })
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.ctx)
    }

    pub fn posts(&self) -> PostService<'_> {
        PostService::new(&self.ctx)
    }

    pub fn subreddits(&self) -> SubredditService<'_> {
        SubredditService::new(&self.ctx)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}
