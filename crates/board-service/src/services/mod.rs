//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation and orchestration of repository operations.

pub mod context;
pub mod error;
pub mod post;
pub mod subreddit;
pub mod user;

#[cfg(test)]
mod fakes;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use subreddit::SubredditService;
pub use user::UserService;
