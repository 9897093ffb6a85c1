//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod subreddit;
mod user;

pub use post::{PostListingModel, PostModel};
pub use subreddit::SubredditModel;
pub use user::UserModel;
