//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewPost, NewSubreddit, Post, PostListing, Subreddit, User};
use crate::error::DomainError;
use crate::value_objects::{PageRequest, PostId, SubredditId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Insert a user and return it as re-read from the store
    ///
    /// A duplicate username yields `DomainError::UsernameAlreadyExists`.
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a bare post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Insert a post and return it as re-read from the store
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// List posts newest first, joined with author and subreddit
    async fn list(&self, page: PageRequest) -> RepoResult<Vec<PostListing>>;

    /// List one user's posts newest first, joined with author and subreddit
    async fn list_by_user(&self, user_id: UserId, page: PageRequest)
        -> RepoResult<Vec<PostListing>>;

    /// Find a single post joined with author and subreddit
    async fn find_listing(&self, id: PostId) -> RepoResult<Option<PostListing>>;
}

// ============================================================================
// Subreddit Repository
// ============================================================================

#[async_trait]
pub trait SubredditRepository: Send + Sync {
    /// Find subreddit by ID
    async fn find_by_id(&self, id: SubredditId) -> RepoResult<Option<Subreddit>>;

    /// Insert a subreddit and return it as re-read from the store
    async fn create(&self, subreddit: &NewSubreddit) -> RepoResult<Subreddit>;

    /// List subreddits newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Vec<Subreddit>>;
}
