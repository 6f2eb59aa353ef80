use async_trait::async_trait;

use crate::modules::user::application::domain::UserId;
use crate::modules::user::application::ports::{
    incoming::use_cases::{DeactivateUserError, DeactivateUserUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};

/// Soft deactivation: the row stays, `is_active` flips to false.
#[derive(Debug, Clone)]
pub struct DeactivateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeactivateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeactivateUserUseCase for DeactivateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeactivateUserError> {
        self.repository
            .set_active(user_id, false)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeactivateUserError::UserNotFound,
                other => DeactivateUserError::RepositoryError(other.to_string()),
            })
    }
}
