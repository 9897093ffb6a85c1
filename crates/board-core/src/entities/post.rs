//! Post entity - a submitted link owned by a user

use chrono::{DateTime, Utc};

use crate::entities::{Subreddit, User};
use crate::value_objects::{PostId, SubredditId, UserId};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub url: String,
    pub user_id: UserId,
    pub subreddit_id: Option<SubredditId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a Post outside any subreddit, timestamps set to now
    pub fn new(id: PostId, user_id: UserId, title: String, url: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            url,
            user_id,
            subreddit_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the post was submitted to a subreddit
    #[inline]
    pub fn is_in_subreddit(&self) -> bool {
        self.subreddit_id.is_some()
    }

    /// Check if the post is owned by the given user
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Values for inserting a new post; id and timestamps come from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: UserId,
    pub subreddit_id: Option<SubredditId>,
    pub title: String,
    pub url: String,
}

/// A post joined with its author and (optional) subreddit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListing {
    pub post: Post,
    pub user: User,
    pub subreddit: Option<Subreddit>,
}

impl PostListing {
    /// Check the joined rows agree with the post's foreign keys
    pub fn is_consistent(&self) -> bool {
        let user_ok = self.user.id == self.post.user_id;
        let sub_ok = match (&self.subreddit, self.post.subreddit_id) {
            (Some(sub), Some(id)) => sub.id == id,
            (None, None) => true,
            _ => false,
        };
        user_ok && sub_ok
    }
}
