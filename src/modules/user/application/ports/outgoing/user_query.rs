use async_trait::async_trait;

use crate::modules::user::application::domain::{PartialSettings, PublicProfile, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Public profile of a user, with city/country/language names and resolved settings.
    async fn get_public_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<PublicProfile>, UserQueryError>;

    /// The user's stored settings row, unmerged. `None` when no row exists.
    async fn get_settings(&self, user_id: UserId)
        -> Result<Option<PartialSettings>, UserQueryError>;
}
