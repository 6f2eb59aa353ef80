use async_trait::async_trait;

use crate::modules::user::application::domain::{PartialSettings, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Write `patch` over the user's stored settings, creating the row if needed.
    /// Keys unset in the patch keep their stored value. Returns the stored row.
    async fn save_settings(
        &self,
        user_id: UserId,
        patch: PartialSettings,
    ) -> Result<PartialSettings, SettingsRepositoryError>;
}
