//! Response DTOs returned by service operations
//!
//! All response DTOs implement `Serialize` for JSON output.

use board_core::value_objects::{PostId, SubredditId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// User response. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Subreddit Responses
// ============================================================================

/// Subreddit response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubredditResponse {
    pub id: SubredditId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// A freshly created post, with foreign keys as plain ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub url: String,
    pub user_id: UserId,
    pub subreddit_id: Option<SubredditId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post as it appears in listings, with author and subreddit nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostListingResponse {
    pub id: PostId,
    pub title: String,
    pub url: String,
    pub user_id: UserId,
    pub subreddit_id: Option<SubredditId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserResponse,
    pub subreddit: Option<SubredditResponse>,
}
