//! Subreddit service

use board_core::entities::NewSubreddit;
use board_core::value_objects::{ListOptions, SubredditId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateSubredditRequest, SubredditResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Subreddit service
pub struct SubredditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubredditService<'a> {
    /// Create a new SubredditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a subreddit. A taken name is reported as a database error.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_subreddit(
        &self,
        request: CreateSubredditRequest,
    ) -> ServiceResult<SubredditResponse> {
        request.validate()?;

        let subreddit = self
            .ctx
            .subreddit_repo()
            .create(&NewSubreddit {
                name: request.name,
                description: request.description,
            })
            .await?;

        info!(subreddit_id = %subreddit.id, "Subreddit created");

        Ok(SubredditResponse::from(subreddit))
    }

    /// One page of subreddits, newest first
    #[instrument(skip(self))]
    pub async fn get_all_subreddits(
        &self,
        options: ListOptions,
    ) -> ServiceResult<Vec<SubredditResponse>> {
        let subreddits = self.ctx.subreddit_repo().list(options.resolve()).await?;
        Ok(subreddits.into_iter().map(SubredditResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_subreddit(&self, subreddit_id: SubredditId) -> ServiceResult<SubredditResponse> {
        self.ctx
            .subreddit_repo()
            .find_by_id(subreddit_id)
            .await?
            .map(SubredditResponse::from)
            .ok_or_else(|| ServiceError::not_found("Subreddit", subreddit_id))
    }
}
