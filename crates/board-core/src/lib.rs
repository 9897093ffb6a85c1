//! # board-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewPost, NewSubreddit, Post, PostListing, Subreddit, User};
pub use error::DomainError;
pub use traits::{PostRepository, RepoResult, SubredditRepository, UserRepository};
pub use value_objects::{
    IdParseError, ListOptions, PageRequest, PostId, SubredditId, UserId, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
