//! PostgreSQL implementation of SubredditRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::{NewSubreddit, Subreddit};
use board_core::traits::{RepoResult, SubredditRepository};
use board_core::value_objects::{PageRequest, SubredditId};

use crate::mappers::SubredditInsert;
use crate::models::SubredditModel;

use super::error::{map_db_error, subreddit_not_found};

/// PostgreSQL implementation of SubredditRepository
#[derive(Clone)]
pub struct PgSubredditRepository {
    pool: PgPool,
}

impl PgSubredditRepository {
    /// Create a new PgSubredditRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubredditRepository for PgSubredditRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: SubredditId) -> RepoResult<Option<Subreddit>> {
        let result = sqlx::query_as::<_, SubredditModel>(
            r"
            SELECT id, name, description, created_at, updated_at
            FROM subreddits
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Subreddit::from))
    }

    // Duplicate names are not special-cased: they surface as a DatabaseError.
    #[instrument(skip(self))]
    async fn create(&self, subreddit: &NewSubreddit) -> RepoResult<Subreddit> {
        let insert = SubredditInsert::new(subreddit);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO subreddits (name, description)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(insert.name)
        .bind(insert.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let id = SubredditId::new(id);
        self.find_by_id(id).await?.ok_or_else(|| subreddit_not_found(id))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Vec<Subreddit>> {
        let results = sqlx::query_as::<_, SubredditModel>(
            r"
            SELECT id, name, description, created_at, updated_at
            FROM subreddits
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Subreddit::from).collect())
    }
}
