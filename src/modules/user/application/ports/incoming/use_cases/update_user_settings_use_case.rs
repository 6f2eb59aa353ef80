use async_trait::async_trait;

use crate::modules::user::application::domain::{PartialSettings, Settings, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        patch: PartialSettings,
    ) -> Result<Settings, UpdateUserSettingsError>;
}
