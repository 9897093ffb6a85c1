//! Subreddit entity - a named community posts can belong to

use chrono::{DateTime, Utc};

use crate::value_objects::SubredditId;

/// Subreddit entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subreddit {
    pub id: SubredditId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subreddit {
    /// Create a Subreddit with both timestamps set to now
    pub fn new(id: SubredditId, name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Community path, e.g. `/r/rust`
    pub fn path(&self) -> String {
        format!("/r/{}", self.name)
    }
}

/// Values for inserting a new subreddit; id and timestamps come from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubreddit {
    pub name: String,
    pub description: Option<String>,
}
