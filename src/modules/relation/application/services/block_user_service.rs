use async_trait::async_trait;

use crate::modules::relation::application::domain::RelationRecord;
use crate::modules::relation::application::ports::{
    incoming::use_cases::{BlockUserCommand, BlockUserError, BlockUserUseCase},
    outgoing::{RelationRepository, RelationRepositoryError},
};

#[derive(Debug, Clone)]
pub struct BlockUserService<R>
where
    R: RelationRepository + Send + Sync,
{
    repository: R,
}

impl<R> BlockUserService<R>
where
    R: RelationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> BlockUserUseCase for BlockUserService<R>
where
    R: RelationRepository + Send + Sync,
{
    async fn execute(&self, command: BlockUserCommand) -> Result<RelationRecord, BlockUserError> {
        self.repository
            .block(command.blocker(), command.target())
            .await
            .map_err(|e| match e {
                RelationRepositoryError::RelationNotFound => BlockUserError::RelationNotFound,
                other => BlockUserError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::relation::application::domain::{NewRelation, RelationType};
    use crate::modules::relation::application::ports::incoming::use_cases::BlockUserCommandError;
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

    #[tokio::test]
    async fn blocks_through_repository() {
        let mut repo = MockRelationRepositoryMock::new();
        repo.expect_block()
            .with(eq(UserId::from(9)), eq(UserId::from(5)))
            .times(1)
            .returning(|_, _| {
                Ok(RelationRecord {
                    id: 1,
                    relation_type: RelationType::Friends,
                    user_id_low: UserId::from(5),
                    user_id_high: UserId::from(9),
                    blocked_low: false,
                    blocked_high: true,
                })
            });

        let service = BlockUserService::new(repo);
        let command = BlockUserCommand::new(UserId::from(9), UserId::from(5)).unwrap();

        let record = service.execute(command).await.unwrap();

        assert!(record.is_blocked());
        assert!(record.blocked_high);
    }

    #[tokio::test]
    async fn missing_relation_is_reported() {
        let mut repo = MockRelationRepositoryMock::new();
        repo.expect_block()
            .returning(|_, _| Err(RelationRepositoryError::RelationNotFound));

        let service = BlockUserService::new(repo);
        let command = BlockUserCommand::new(UserId::from(1), UserId::from(2)).unwrap();

        assert!(matches!(
            service.execute(command).await,
            Err(BlockUserError::RelationNotFound)
        ));
    }

    #[test]
    fn self_block_is_rejected() {
        assert_eq!(
            BlockUserCommand::new(UserId::from(4), UserId::from(4)),
            Err(BlockUserCommandError::SelfBlock)
        );
    }
}
