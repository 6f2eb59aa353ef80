use async_trait::async_trait;

use crate::modules::relation::application::domain::RelationRecord;
use crate::modules::relation::application::ports::{
    incoming::use_cases::{GetRelationBetweenError, GetRelationBetweenUseCase},
    outgoing::RelationQuery,
};
use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone)]
pub struct GetRelationBetweenService<Q>
where
    Q: RelationQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetRelationBetweenService<Q>
where
    Q: RelationQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRelationBetweenUseCase for GetRelationBetweenService<Q>
where
    Q: RelationQuery + Send + Sync,
{
    async fn execute(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<RelationRecord, GetRelationBetweenError> {
        self.query
            .find_between(a, b)
            .await?
            .ok_or(GetRelationBetweenError::NotFound)
    }
}
