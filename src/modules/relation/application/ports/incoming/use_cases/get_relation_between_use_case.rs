use async_trait::async_trait;

use crate::modules::relation::application::domain::RelationRecord;
use crate::modules::relation::application::ports::outgoing::RelationQueryError;
use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRelationBetweenError {
    #[error("Relation not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<RelationQueryError> for GetRelationBetweenError {
    fn from(e: RelationQueryError) -> Self {
        match e {
            RelationQueryError::DatabaseError(msg) => Self::QueryError(msg),
        }
    }
}

/// The relation two users share, whichever order they are given in.
#[async_trait]
pub trait GetRelationBetweenUseCase: Send + Sync {
    async fn execute(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<RelationRecord, GetRelationBetweenError>;
}
