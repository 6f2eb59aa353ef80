use async_trait::async_trait;

use crate::modules::relation::application::domain::RelationRecord;
use crate::modules::relation::application::ports::{
    incoming::use_cases::{CreateRelationCommand, UpsertRelationError, UpsertRelationUseCase},
    outgoing::RelationRepository,
};

#[derive(Debug, Clone)]
pub struct UpsertRelationService<R>
where
    R: RelationRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpsertRelationService<R>
where
    R: RelationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertRelationUseCase for UpsertRelationService<R>
where
    R: RelationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateRelationCommand,
    ) -> Result<RelationRecord, UpsertRelationError> {
        self.repository
            .upsert_relation(command.to_new_relation())
            .await
            .map_err(|e| UpsertRelationError::RepositoryError(e.to_string()))
    }
}
