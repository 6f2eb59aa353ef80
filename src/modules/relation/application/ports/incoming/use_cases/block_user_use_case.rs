use async_trait::async_trait;

use crate::modules::relation::application::domain::RelationRecord;
use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockUserCommand {
    blocker: UserId,
    target: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockUserCommandError {
    #[error("A user cannot block itself")]
    SelfBlock,
}

impl BlockUserCommand {
    pub fn new(blocker: UserId, target: UserId) -> Result<Self, BlockUserCommandError> {
        if blocker == target {
            return Err(BlockUserCommandError::SelfBlock);
        }

        Ok(Self { blocker, target })
    }

    pub fn blocker(&self) -> UserId {
        self.blocker
    }

    pub fn target(&self) -> UserId {
        self.target
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlockUserError {
    #[error("Relation not found")]
    RelationNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Record that the blocker blocked the target on their existing relation.
#[async_trait]
pub trait BlockUserUseCase: Send + Sync {
    async fn execute(&self, command: BlockUserCommand) -> Result<RelationRecord, BlockUserError>;
}
