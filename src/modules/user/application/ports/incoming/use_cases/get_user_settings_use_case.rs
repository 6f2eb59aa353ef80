use async_trait::async_trait;

use crate::modules::user::application::domain::{Settings, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserSettingsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Always yields a complete settings set; users without a stored row get the defaults.
#[async_trait]
pub trait GetUserSettingsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Settings, GetUserSettingsError>;
}
