//! Repository traits

mod repositories;

pub use repositories::{PostRepository, RepoResult, SubredditRepository, UserRepository};
