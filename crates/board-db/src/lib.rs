//! # board-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `board-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers, including splitting joined listing rows
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_common::DatabaseConfig;
//! use board_core::traits::UserRepository;
//! use board_db::{create_pool, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     let user = user_repo.create("alice", "$argon2id$...").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, PgPool};
pub use repositories::{PgPostRepository, PgSubredditRepository, PgUserRepository};
