use async_trait::async_trait;

use crate::modules::user::application::domain::{PartialSettings, Settings, UserId};
use crate::modules::user::application::ports::{
    incoming::use_cases::{UpdateUserSettingsError, UpdateUserSettingsUseCase},
    outgoing::SettingsRepository,
};

#[derive(Debug, Clone)]
pub struct UpdateUserSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateUserSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserSettingsUseCase for UpdateUserSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        patch: PartialSettings,
    ) -> Result<Settings, UpdateUserSettingsError> {
        let stored = self
            .repository
            .save_settings(user_id, patch)
            .await
            .map_err(|e| UpdateUserSettingsError::RepositoryError(e.to_string()))?;

        Ok(Settings::resolve(Some(&stored)))
    }
}
