//! Subreddit entity <-> model mapper

use board_core::entities::{NewSubreddit, Subreddit};
use board_core::value_objects::SubredditId;

use crate::models::SubredditModel;

/// Convert SubredditModel to Subreddit entity
impl From<SubredditModel> for Subreddit {
    fn from(model: SubredditModel) -> Self {
        Subreddit {
            id: SubredditId::new(model.id),
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed values for inserting a subreddit
pub struct SubredditInsert<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> SubredditInsert<'a> {
    pub fn new(subreddit: &'a NewSubreddit) -> Self {
        Self {
            name: &subreddit.name,
            description: subreddit.description.as_deref(),
        }
    }
}
