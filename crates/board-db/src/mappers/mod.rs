//! Entity to model mappers
//!
//! This module provides conversions between domain entities (board-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `From<PostListingModel> for PostListing`: Split a joined row into nested objects
//! - `*Insert` structs: Borrow new-entity data for binding

mod post;
mod subreddit;
mod user;

pub use post::PostInsert;
pub use subreddit::SubredditInsert;
