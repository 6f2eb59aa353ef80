pub mod sea_orm_entity;

mod profile_loader;
mod reference_query_postgres;
mod settings_repository_postgres;
mod user_query_postgres;
mod user_repository_postgres;

pub use profile_loader::{load_profiles, LoadedProfile};
pub use reference_query_postgres::ReferenceQueryPostgres;
pub use settings_repository_postgres::SettingsRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
