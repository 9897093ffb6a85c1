//! # board-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! ```rust,ignore
//! use board_service::{ServiceContext, UserService};
//! use board_service::dto::CreateUserRequest;
//!
//! let ctx = ServiceContext::from_pool(pool);
//! let user = UserService::new(&ctx)
//!     .create_user(CreateUserRequest { username: "alice".into(), password: "hunter2".into() })
//!     .await?;
//! ```

pub mod dto;
pub mod services;

pub use services::{
    PostService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SubredditService, UserService,
};
