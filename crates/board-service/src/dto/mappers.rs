//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use board_core::entities::{Post, PostListing, Subreddit, User};

use super::responses::{PostListingResponse, PostResponse, SubredditResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Subreddit Mappers
// ============================================================================

impl From<&Subreddit> for SubredditResponse {
    fn from(subreddit: &Subreddit) -> Self {
        Self::from(subreddit.clone())
    }
}

impl From<Subreddit> for SubredditResponse {
    fn from(subreddit: Subreddit) -> Self {
        Self {
            id: subreddit.id,
            name: subreddit.name,
            description: subreddit.description,
            created_at: subreddit.created_at,
            updated_at: subreddit.updated_at,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            url: post.url,
            user_id: post.user_id,
            subreddit_id: post.subreddit_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostListing> for PostListingResponse {
    fn from(listing: PostListing) -> Self {
        let PostListing {
            post,
            user,
            subreddit,
        } = listing;

        Self {
            id: post.id,
            title: post.title,
            url: post.url,
            user_id: post.user_id,
            subreddit_id: post.subreddit_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user: UserResponse::from(user),
            subreddit: subreddit.map(SubredditResponse::from),
        }
    }
}
