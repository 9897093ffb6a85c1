//! Subreddit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the subreddits table
#[derive(Debug, Clone, FromRow)]
pub struct SubredditModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
