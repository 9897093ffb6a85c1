//! Post entity <-> model mapper, including the joined listing row

use board_core::entities::{NewPost, Post, PostListing, Subreddit, User};
use board_core::value_objects::{PostId, SubredditId, UserId};

use crate::models::{PostListingModel, PostModel};

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            title: model.title,
            url: model.url,
            user_id: UserId::new(model.user_id),
            subreddit_id: model.subreddit_id.map(SubredditId::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a flat joined row into post, author and subreddit
impl From<PostListingModel> for PostListing {
    fn from(row: PostListingModel) -> Self {
        let post = Post {
            id: PostId::new(row.post_id),
            title: row.post_title,
            url: row.post_url,
            user_id: UserId::new(row.post_user_id),
            subreddit_id: row.post_subreddit_id.map(SubredditId::new),
            created_at: row.post_created_at,
            updated_at: row.post_updated_at,
        };

        let user = User {
            id: UserId::new(row.user_id),
            username: row.user_username,
            created_at: row.user_created_at,
            updated_at: row.user_updated_at,
        };

        // NOT NULL columns come back NULL only when the LEFT JOIN missed
        let subreddit = match (
            row.subreddit_id,
            row.subreddit_name,
            row.subreddit_created_at,
            row.subreddit_updated_at,
        ) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Some(Subreddit {
                id: SubredditId::new(id),
                name,
                description: row.subreddit_description,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        PostListing {
            post,
            user,
            subreddit,
        }
    }
}

/// Borrowed values for inserting a post
pub struct PostInsert<'a> {
    pub user_id: i64,
    pub subreddit_id: Option<i64>,
    pub title: &'a str,
    pub url: &'a str,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a NewPost) -> Self {
        Self {
            user_id: post.user_id.into_inner(),
            subreddit_id: post.subreddit_id.map(SubredditId::into_inner),
            title: &post.title,
            url: &post.url,
        }
    }
}
