mod relation_query;
mod relation_repository;

pub use relation_query::{RelationQuery, RelationQueryError, UserRelationView};
pub use relation_repository::{RelationRepository, RelationRepositoryError};
