use async_trait::async_trait;

use crate::modules::user::application::domain::{Settings, UserId};
use crate::modules::user::application::ports::{
    incoming::use_cases::{GetUserSettingsError, GetUserSettingsUseCase},
    outgoing::{UserQuery, UserQueryError},
};

#[derive(Debug, Clone)]
pub struct GetUserSettingsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserSettingsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserSettingsUseCase for GetUserSettingsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Settings, GetUserSettingsError> {
        let stored = self.query.get_settings(user_id).await.map_err(|e| match e {
            UserQueryError::DatabaseError(msg) => GetUserSettingsError::QueryError(msg),
        })?;

        Ok(Settings::resolve(stored.as_ref()))
    }
}
