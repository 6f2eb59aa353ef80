use async_trait::async_trait;

use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn set_active(&self, user_id: UserId, active: bool) -> Result<(), UserRepositoryError>;
}
