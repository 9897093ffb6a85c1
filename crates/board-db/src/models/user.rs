//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table (without the password column)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
