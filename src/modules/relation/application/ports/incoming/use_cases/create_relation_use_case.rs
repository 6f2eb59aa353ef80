use async_trait::async_trait;

use crate::modules::relation::application::domain::{NewRelation, RelationRecord, RelationType};
use crate::modules::user::application::domain::UserId;

//
// ──────────────────────────────────────────────────────────
// Relation Command
// ──────────────────────────────────────────────────────────
//

/// Two distinct users to relate. Argument order does not matter: both
/// orders produce the same stored pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateRelationCommand {
    relation_type: RelationType,
    user_a: UserId,
    user_b: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelationCommandError {
    #[error("A user cannot be related to itself")]
    SelfRelation,
}

impl CreateRelationCommand {
    pub fn new(
        relation_type: RelationType,
        user_a: UserId,
        user_b: UserId,
    ) -> Result<Self, RelationCommandError> {
        if user_a == user_b {
            return Err(RelationCommandError::SelfRelation);
        }

        Ok(Self {
            relation_type,
            user_a,
            user_b,
        })
    }

    pub fn to_new_relation(&self) -> NewRelation {
        NewRelation::between(self.relation_type, self.user_a, self.user_b).canonicalize()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRelationError {
    #[error("Relation already exists")]
    RelationAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateRelationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateRelationCommand,
    ) -> Result<RelationRecord, CreateRelationError>;
}
