use async_trait::async_trait;

use crate::modules::user::application::domain::{PublicProfile, UserId};
use crate::modules::user::application::ports::{
    incoming::use_cases::{GetPublicProfileError, GetPublicProfileUseCase},
    outgoing::UserQuery,
};

#[derive(Debug, Clone)]
pub struct GetPublicProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPublicProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicProfileUseCase for GetPublicProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<PublicProfile, GetPublicProfileError> {
        self.query
            .get_public_profile(user_id)
            .await?
            .ok_or(GetPublicProfileError::NotFound)
    }
}
