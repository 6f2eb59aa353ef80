use async_trait::async_trait;

use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeactivateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeactivateUserError>;
}
