use async_trait::async_trait;

use super::CreateRelationCommand;
use crate::modules::relation::application::domain::RelationRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertRelationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Create the pair's relation, or change the type of the one it already has.
#[async_trait]
pub trait UpsertRelationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateRelationCommand,
    ) -> Result<RelationRecord, UpsertRelationError>;
}
