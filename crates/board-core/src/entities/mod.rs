//! Domain entities - core business objects

mod post;
mod subreddit;
mod user;

pub use post::{NewPost, Post, PostListing};
pub use subreddit::{NewSubreddit, Subreddit};
pub use user::User;
