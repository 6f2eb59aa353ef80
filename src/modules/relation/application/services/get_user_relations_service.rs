use async_trait::async_trait;

use crate::modules::relation::application::ports::{
    incoming::use_cases::{GetUserRelationsError, GetUserRelationsUseCase},
    outgoing::{RelationQuery, UserRelationView},
};
use crate::modules::user::application::domain::UserId;

#[derive(Debug, Clone)]
pub struct GetUserRelationsService<Q>
where
    Q: RelationQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserRelationsService<Q>
where
    Q: RelationQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserRelationsUseCase for GetUserRelationsService<Q>
where
    Q: RelationQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        include_profile: bool,
    ) -> Result<Vec<UserRelationView>, GetUserRelationsError> {
        Ok(self
            .query
            .relations_for_user(user_id, include_profile)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::relation::application::domain::{RelationRecord, RelationType};
    use crate::modules::relation::application::ports::outgoing::RelationQueryError;

    #[derive(Clone)]
    struct MockRelationQuery {
        result: Result<Vec<UserRelationView>, RelationQueryError>,
    }

    #[async_trait]
    impl RelationQuery for MockRelationQuery {
        async fn relations_for_user(
            &self,
            _user_id: UserId,
            _include_profile: bool,
        ) -> Result<Vec<UserRelationView>, RelationQueryError> {
            self.result.clone()
        }

        async fn find_between(
            &self,
            _a: UserId,
            _b: UserId,
        ) -> Result<Option<RelationRecord>, RelationQueryError> {
            unimplemented!("not used")
        }
    }

    #[tokio::test]
    async fn returns_relations_from_query() {
        let view = UserRelationView {
            user: None,
            relation_type: RelationType::Friends,
            setting_high: None,
            setting_low: None,
            blocked: false,
            user_id: UserId::from(9),
        };
        let service = GetUserRelationsService::new(MockRelationQuery {
            result: Ok(vec![view.clone()]),
        });

        let views = service.execute(UserId::from(5), false).await.unwrap();

        assert_eq!(views, vec![view]);
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let service = GetUserRelationsService::new(MockRelationQuery {
            result: Err(RelationQueryError::DatabaseError("connection lost".into())),
        });

        match service.execute(UserId::from(5), true).await {
            Err(GetUserRelationsError::QueryError(msg)) => {
                assert!(msg.contains("connection lost"))
            }
            other => panic!("Expected QueryError, got {:?}", other),
        }
    }
}
