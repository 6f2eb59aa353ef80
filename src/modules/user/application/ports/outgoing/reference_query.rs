use async_trait::async_trait;

use crate::modules::user::application::domain::{City, Country, Language};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReferenceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReferenceQuery: Send + Sync {
    async fn active_countries(&self) -> Result<Vec<Country>, ReferenceQueryError>;

    async fn active_languages(&self) -> Result<Vec<Language>, ReferenceQueryError>;

    async fn active_cities(&self) -> Result<Vec<City>, ReferenceQueryError>;

    async fn default_language(&self) -> Result<Option<Language>, ReferenceQueryError>;

    async fn default_country(&self) -> Result<Option<Country>, ReferenceQueryError>;
}
