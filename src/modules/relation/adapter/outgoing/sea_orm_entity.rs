use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::modules::relation::application::domain::{RelationRecord, RelationType};
use crate::modules::user::application::domain::UserId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "relation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub kind: RelationKind,
    pub user_id_low: i32,
    pub user_id_high: i32,
    pub blocked_low: bool,
    pub blocked_high: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "relation_type")]
pub enum RelationKind {
    #[sea_orm(string_value = "event")]
    Event,

    #[sea_orm(string_value = "friends")]
    Friends,

    #[sea_orm(string_value = "matched")]
    Matched,
}

impl From<RelationType> for RelationKind {
    fn from(value: RelationType) -> Self {
        match value {
            RelationType::Event => Self::Event,
            RelationType::Friends => Self::Friends,
            RelationType::Matched => Self::Matched,
        }
    }
}

impl From<RelationKind> for RelationType {
    fn from(value: RelationKind) -> Self {
        match value {
            RelationKind::Event => Self::Event,
            RelationKind::Friends => Self::Friends,
            RelationKind::Matched => Self::Matched,
        }
    }
}

impl Model {
    pub fn to_record(&self) -> RelationRecord {
        RelationRecord {
            id: self.id,
            relation_type: self.kind.into(),
            user_id_low: UserId::from(self.user_id_low),
            user_id_high: UserId::from(self.user_id_high),
            blocked_low: self.blocked_low,
            blocked_high: self.blocked_high,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserIdLow",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    UserLow,

    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserIdHigh",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    UserHigh,
}

impl ActiveModel {
    /// Swap the endpoints when they arrive out of order. Blocked flags move
    /// with their user.
    pub fn canonicalize(&mut self) {
        let reversed = match (&self.user_id_low, &self.user_id_high) {
            (
                ActiveValue::Set(low) | ActiveValue::Unchanged(low),
                ActiveValue::Set(high) | ActiveValue::Unchanged(high),
            ) => high < low,
            _ => false,
        };

        if reversed {
            std::mem::swap(&mut self.user_id_low, &mut self.user_id_high);
            std::mem::swap(&mut self.blocked_low, &mut self.blocked_high);
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if insert {
            self.canonicalize();
        } else {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
