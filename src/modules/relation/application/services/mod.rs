mod block_user_service;
mod create_relation_service;
mod get_relation_between_service;
mod get_user_relations_service;
mod upsert_relation_service;

pub use block_user_service::BlockUserService;
pub use create_relation_service::CreateRelationService;
pub use get_relation_between_service::GetRelationBetweenService;
pub use get_user_relations_service::GetUserRelationsService;
pub use upsert_relation_service::UpsertRelationService;
