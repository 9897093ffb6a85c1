//! Value objects - immutable types that represent domain concepts

mod ids;
mod pagination;

pub use ids::{IdParseError, PostId, SubredditId, UserId};
pub use pagination::{ListOptions, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
