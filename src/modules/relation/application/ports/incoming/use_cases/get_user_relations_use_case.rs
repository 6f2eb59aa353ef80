use async_trait::async_trait;

use crate::modules::relation::application::ports::outgoing::{
    RelationQueryError, UserRelationView,
};
use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserRelationsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<RelationQueryError> for GetUserRelationsError {
    fn from(e: RelationQueryError) -> Self {
        match e {
            RelationQueryError::DatabaseError(msg) => Self::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait GetUserRelationsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        include_profile: bool,
    ) -> Result<Vec<UserRelationView>, GetUserRelationsError>;
}
