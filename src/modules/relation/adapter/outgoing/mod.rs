pub mod sea_orm_entity;

mod relation_query_postgres;
mod relation_repository_postgres;

pub use relation_query_postgres::RelationQueryPostgres;
pub use relation_repository_postgres::RelationRepositoryPostgres;
