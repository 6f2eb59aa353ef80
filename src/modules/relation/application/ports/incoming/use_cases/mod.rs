mod block_user_use_case;
mod create_relation_use_case;
mod get_relation_between_use_case;
mod get_user_relations_use_case;
mod upsert_relation_use_case;

pub use block_user_use_case::{
    BlockUserCommand, BlockUserCommandError, BlockUserError, BlockUserUseCase,
};
pub use create_relation_use_case::{
    CreateRelationCommand, CreateRelationError, CreateRelationUseCase, RelationCommandError,
};
pub use get_relation_between_use_case::{GetRelationBetweenError, GetRelationBetweenUseCase};
pub use get_user_relations_use_case::{GetUserRelationsError, GetUserRelationsUseCase};
pub use upsert_relation_use_case::{UpsertRelationError, UpsertRelationUseCase};
