use async_trait::async_trait;
use serde::Serialize;

use crate::modules::relation::application::domain::{RelationRecord, RelationType};
use crate::modules::user::application::domain::{PartialSettings, PublicProfile, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RelationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// One relation as seen from one of its participants.
///
/// `user` is the other participant's public profile, `null` when profiles were
/// not requested. `setting_high`/`setting_low` are the raw stored settings of
/// the pair's endpoints and are omitted when the endpoint has none. `blocked`
/// is set when either side has blocked the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRelationView {
    pub user: Option<PublicProfile>,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_high: Option<PartialSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_low: Option<PartialSettings>,
    pub blocked: bool,
    pub user_id: UserId,
}

#[async_trait]
pub trait RelationQuery: Send + Sync {
    /// Every relation `user_id` participates in, from either side.
    ///
    /// With `include_profile` false only the relation fields are filled and no
    /// profile lookups happen. Otherwise relations whose other participant
    /// no longer resolves are dropped.
    async fn relations_for_user(
        &self,
        user_id: UserId,
        include_profile: bool,
    ) -> Result<Vec<UserRelationView>, RelationQueryError>;

    async fn find_between(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<Option<RelationRecord>, RelationQueryError>;
}
