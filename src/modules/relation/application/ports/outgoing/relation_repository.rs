use async_trait::async_trait;

use crate::modules::relation::application::domain::{NewRelation, RelationRecord};
use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RelationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Relation already exists")]
    RelationAlreadyExists,

    #[error("Relation not found")]
    RelationNotFound,
}

#[async_trait]
pub trait RelationRepository: Send + Sync {
    /// Insert a new relation. Fails with `RelationAlreadyExists` when the
    /// pair is already related, whichever order it was created in.
    async fn create_relation(
        &self,
        relation: NewRelation,
    ) -> Result<RelationRecord, RelationRepositoryError>;

    /// Insert, or replace the type of the pair's existing relation.
    /// Blocked flags of an existing relation are left as they are.
    async fn upsert_relation(
        &self,
        relation: NewRelation,
    ) -> Result<RelationRecord, RelationRepositoryError>;

    /// Set the blocked flag of `blocker`'s endpoint on its relation with `target`.
    async fn block(
        &self,
        blocker: UserId,
        target: UserId,
    ) -> Result<RelationRecord, RelationRepositoryError>;
}
