//! Error handling utilities for repositories

use board_core::error::DomainError;
use board_core::value_objects::{PostId, SubredditId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError, keeping the store's message
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "post not found" error
pub fn post_not_found(id: PostId) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "subreddit not found" error
pub fn subreddit_not_found(id: SubredditId) -> DomainError {
    DomainError::SubredditNotFound(id)
}
