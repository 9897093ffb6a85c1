//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use board_core::value_objects::{SubredditId, UserId};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    pub user_id: UserId,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[validate(
        url(message = "Invalid URL"),
        length(max = 2000, message = "URL must be at most 2000 characters")
    )]
    pub url: String,

    /// Community to post into; omitted for a frontpage-only post
    #[serde(default)]
    pub subreddit_id: Option<SubredditId>,
}

// ============================================================================
// Subreddit Requests
// ============================================================================

/// Create subreddit request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubredditRequest {
    #[validate(length(min = 1, max = 30, message = "Subreddit name must be 1-30 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
}
