use async_trait::async_trait;

use crate::modules::relation::application::domain::RelationRecord;
use crate::modules::relation::application::ports::{
    incoming::use_cases::{CreateRelationCommand, CreateRelationError, CreateRelationUseCase},
    outgoing::{RelationRepository, RelationRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateRelationService<R>
where
    R: RelationRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateRelationService<R>
where
    R: RelationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRelationUseCase for CreateRelationService<R>
where
    R: RelationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateRelationCommand,
    ) -> Result<RelationRecord, CreateRelationError> {
        self.repository
            .create_relation(command.to_new_relation())
            .await
            .map_err(|e| match e {
                RelationRepositoryError::RelationAlreadyExists => {
                    CreateRelationError::RelationAlreadyExists
                }
                other => CreateRelationError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::relation::application::domain::{NewRelation, RelationType};
    use crate::modules::user::application::domain::UserId;
    use mockall::{mock, predicate::*};

    mock! {
        pub RelationRepositoryMock {}
        #[async_trait]
        impl RelationRepository for RelationRepositoryMock {
            async fn create_relation(&self, relation: NewRelation) -> Result<RelationRecord, RelationRepositoryError>;
            async fn upsert_relation(&self, relation: NewRelation) -> Result<RelationRecord, RelationRepositoryError>;
            async fn block(&self, blocker: UserId, target: UserId) -> Result<RelationRecord, RelationRepositoryError>;
        }
    }

    fn record_from(relation: NewRelation) -> RelationRecord {
        RelationRecord {
            id: 1,
            relation_type: relation.relation_type,
            user_id_low: relation.user_id_low,
            user_id_high: relation.user_id_high,
            blocked_low: relation.blocked_low,
            blocked_high: relation.blocked_high,
        }
    }

    #[tokio::test]
    async fn passes_canonical_relation_to_repository() {
        let expected = NewRelation::between(RelationType::Friends, UserId::from(5), UserId::from(9));

        let mut repo = MockRelationRepositoryMock::new();
        repo.expect_create_relation()
            .with(eq(expected))
            .times(1)
            .returning(|r| Ok(record_from(r)));

        let service = CreateRelationService::new(repo);
        let command =
            CreateRelationCommand::new(RelationType::Friends, UserId::from(9), UserId::from(5))
                .unwrap();

        let record = service.execute(command).await.unwrap();

        assert_eq!(record.user_id_low, UserId::from(5));
        assert_eq!(record.user_id_high, UserId::from(9));
    }

    #[tokio::test]
    async fn duplicate_pair_is_reported() {
        let mut repo = MockRelationRepositoryMock::new();
        repo.expect_create_relation()
            .returning(|_| Err(RelationRepositoryError::RelationAlreadyExists));

        let service = CreateRelationService::new(repo);
        let command =
            CreateRelationCommand::new(RelationType::Event, UserId::from(1), UserId::from(2))
                .unwrap();

        assert!(matches!(
            service.execute(command).await,
            Err(CreateRelationError::RelationAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let mut repo = MockRelationRepositoryMock::new();
        repo.expect_create_relation()
            .returning(|_| Err(RelationRepositoryError::DatabaseError("timeout".into())));

        let service = CreateRelationService::new(repo);
        let command =
            CreateRelationCommand::new(RelationType::Event, UserId::from(1), UserId::from(2))
                .unwrap();

        match service.execute(command).await {
            Err(CreateRelationError::RepositoryError(msg)) => assert!(msg.contains("timeout")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
