//! Post service
//!
//! Handles post submission and the joined post listings.

use board_core::entities::NewPost;
use board_core::value_objects::{ListOptions, PostId, UserId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{CreatePostRequest, PostListingResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a post
    ///
    /// Unknown users or subreddits are rejected by the store and surface as
    /// database errors.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        request.validate()?;

        let new_post = NewPost {
            user_id: request.user_id,
            subreddit_id: request.subreddit_id,
            title: request.title,
            url: request.url,
        };

        let post = self.ctx.post_repo().create(&new_post).await?;

        info!(post_id = %post.id, "Post created");

        Ok(PostResponse::from(post))
    }

    /// One page of all posts, newest first
    #[instrument(skip(self))]
    pub async fn get_all_posts(
        &self,
        options: ListOptions,
    ) -> ServiceResult<Vec<PostListingResponse>> {
        let page = options.resolve();
        let listings = self.ctx.post_repo().list(page).await?;

        debug!(count = listings.len(), limit = page.limit, offset = page.offset, "Listed posts");

        Ok(listings.into_iter().map(PostListingResponse::from).collect())
    }

    /// One page of a user's posts, newest first
    ///
    /// An unknown user simply has no posts.
    #[instrument(skip(self))]
    pub async fn get_all_posts_for_user(
        &self,
        user_id: UserId,
        options: ListOptions,
    ) -> ServiceResult<Vec<PostListingResponse>> {
        let listings = self
            .ctx
            .post_repo()
            .list_by_user(user_id, options.resolve())
            .await?;

        Ok(listings.into_iter().map(PostListingResponse::from).collect())
    }

    /// A single post with its author and subreddit
    #[instrument(skip(self))]
    pub async fn get_single_post(&self, post_id: PostId) -> ServiceResult<PostListingResponse> {
        let listing = self
            .ctx
            .post_repo()
            .find_listing(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id))?;

        Ok(PostListingResponse::from(listing))
    }
}
