//! User service
//!
//! Handles account creation, lookup and credential checks.

use board_core::value_objects::UserId;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreateUserRequest, LoginRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user, storing only the password hash
    ///
    /// A taken username fails with `DomainError::UsernameAlreadyExists`.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &password_hash)
            .await?;

        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(user))
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(UserResponse::from(user))
    }

    /// Check a username/password pair
    ///
    /// Unknown users and wrong passwords fail the same way.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn check_login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::invalid_credentials()
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::invalid_credentials()
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|e| {
                warn!(user_id = %user.id, error = %e, "Login failed: password rejected");
            })?;

        info!(user_id = %user.id, "Login succeeded");

        Ok(UserResponse::from(user))
    }
}
