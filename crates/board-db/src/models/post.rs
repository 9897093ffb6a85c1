//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub user_id: i64,
    pub subreddit_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat row of `posts JOIN users LEFT JOIN subreddits`
///
/// Every column is aliased with its table prefix so the three `id`,
/// `created_at` and `updated_at` columns do not collide. The `subreddit_*`
/// columns are all NULL when the post has no subreddit.
#[derive(Debug, Clone, FromRow)]
pub struct PostListingModel {
    pub post_id: i64,
    pub post_title: String,
    pub post_url: String,
    pub post_user_id: i64,
    pub post_subreddit_id: Option<i64>,
    pub post_created_at: DateTime<Utc>,
    pub post_updated_at: DateTime<Utc>,

    pub user_id: i64,
    pub user_username: String,
    pub user_created_at: DateTime<Utc>,
    pub user_updated_at: DateTime<Utc>,

    pub subreddit_id: Option<i64>,
    pub subreddit_name: Option<String>,
    pub subreddit_description: Option<String>,
    pub subreddit_created_at: Option<DateTime<Utc>>,
    pub subreddit_updated_at: Option<DateTime<Utc>>,
}

