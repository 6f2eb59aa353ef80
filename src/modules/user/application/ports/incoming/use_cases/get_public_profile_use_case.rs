use async_trait::async_trait;

use crate::modules::user::application::domain::{PublicProfile, UserId};
use crate::modules::user::application::ports::outgoing::UserQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<UserQueryError> for GetPublicProfileError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::DatabaseError(msg) => Self::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<PublicProfile, GetPublicProfileError>;
}
