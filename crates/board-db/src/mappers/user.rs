//! User entity <-> model mapper

use board_core::entities::User;
use board_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
