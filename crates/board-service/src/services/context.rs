//! Service context - dependency container for services
//!
//! Holds all repositories and the password service needed by services.

use std::sync::Arc;

use board_common::PasswordService;
use board_core::traits::{PostRepository, SubredditRepository, UserRepository};
use board_db::{PgPool, PgPostRepository, PgSubredditRepository, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories sit behind trait objects so services can run against
/// PostgreSQL or against in-memory fakes.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    subreddit_repo: Arc<dyn SubredditRepository>,

    // Services
    password_service: Arc<PasswordService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        subreddit_repo: Arc<dyn SubredditRepository>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            subreddit_repo,
            password_service,
        }
    }

    /// Wire the PostgreSQL repositories around a shared pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgSubredditRepository::new(pool)),
            Arc::new(PasswordService::new()),
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the subreddit repository
    pub fn subreddit_repo(&self) -> &dyn SubredditRepository {
        self.subreddit_repo.as_ref()
    }

    // === Services ===

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("password_service", &self.password_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    subreddit_repo: Option<Arc<dyn SubredditRepository>>,
    password_service: Option<Arc<PasswordService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            post_repo: None,
            subreddit_repo: None,
            password_service: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn subreddit_repo(mut self, repo: Arc<dyn SubredditRepository>) -> Self {
        self.subreddit_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// The password service defaults to [`PasswordService::new`].
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.subreddit_repo
                .ok_or_else(|| ServiceError::validation("subreddit_repo is required"))?,
            self.password_service
                .unwrap_or_else(|| Arc::new(PasswordService::new())),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
