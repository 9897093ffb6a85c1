//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::{NewPost, Post, PostListing};
use board_core::traits::{PostRepository, RepoResult};
use board_core::value_objects::{PageRequest, PostId, UserId};

use crate::mappers::PostInsert;
use crate::models::{PostListingModel, PostModel};

use super::error::{map_db_error, post_not_found};

/// Builds a listing query: the aliased join projection followed by `$tail`.
macro_rules! listing_query {
    ($tail:literal) => {
        concat!(
            r"
            SELECT p.id AS post_id, p.title AS post_title, p.url AS post_url,
                   p.user_id AS post_user_id, p.subreddit_id AS post_subreddit_id,
                   p.created_at AS post_created_at, p.updated_at AS post_updated_at,
                   u.id AS user_id, u.username AS user_username,
                   u.created_at AS user_created_at, u.updated_at AS user_updated_at,
                   s.id AS subreddit_id, s.name AS subreddit_name,
                   s.description AS subreddit_description,
                   s.created_at AS subreddit_created_at, s.updated_at AS subreddit_updated_at
            FROM posts p
            JOIN users u ON p.user_id = u.id
            LEFT JOIN subreddits s ON p.subreddit_id = s.id
            ",
            $tail
        )
    };
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, url, user_id, subreddit_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let insert = PostInsert::new(post);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO posts (user_id, subreddit_id, title, url)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(insert.user_id)
        .bind(insert.subreddit_id)
        .bind(insert.title)
        .bind(insert.url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let id = PostId::new(id);
        self.find_by_id(id).await?.ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Vec<PostListing>> {
        let rows = sqlx::query_as::<_, PostListingModel>(listing_query!(
            r"
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PostListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Vec<PostListing>> {
        let rows = sqlx::query_as::<_, PostListingModel>(listing_query!(
            r"
            WHERE p.user_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(user_id.into_inner())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PostListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_listing(&self, id: PostId) -> RepoResult<Option<PostListing>> {
        let row = sqlx::query_as::<_, PostListingModel>(listing_query!(
            r"
            WHERE p.id = $1
            "
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(PostListing::from))
    }
}
