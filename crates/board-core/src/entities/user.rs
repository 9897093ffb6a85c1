//! User entity - represents a board account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity
///
/// The stored password hash is deliberately not part of the entity; it is only
/// reachable through `UserRepository::get_password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a User with both timestamps set to now
    pub fn new(id: UserId, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            created_at: now,
            updated_at: now,
        }
    }

    /// Profile path, e.g. `/u/alice`
    pub fn profile_path(&self) -> String {
        format!("/u/{}", self.username)
    }

    /// Check whether the row was touched after creation
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.updated_at > self.created_at
    }
}
