mod reference_query;
mod settings_repository;
mod user_query;
mod user_repository;

pub use reference_query::{ReferenceQuery, ReferenceQueryError};
pub use settings_repository::{SettingsRepository, SettingsRepositoryError};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
