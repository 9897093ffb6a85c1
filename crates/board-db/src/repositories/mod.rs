//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in board-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod post;
mod subreddit;
mod user;

pub use post::PgPostRepository;
pub use subreddit::PgSubredditRepository;
pub use user::PgUserRepository;
