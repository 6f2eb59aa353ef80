use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

use crate::modules::relation::application::domain::{CanonicalPair, RelationRecord};
use crate::modules::relation::application::ports::outgoing::{
    RelationQuery, RelationQueryError, UserRelationView,
};
use crate::modules::user::adapter::outgoing::{load_profiles, LoadedProfile};
use crate::modules::user::application::domain::UserId;

use super::sea_orm_entity::{
    Column as RelationColumn, Entity as RelationEntity, Model as RelationModel,
};

#[derive(Debug, Clone)]
pub struct RelationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RelationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn database_error(e: DbErr) -> RelationQueryError {
    RelationQueryError::DatabaseError(e.to_string())
}

/// Turn rows into views from `subject`'s side.
///
/// Without `profiles` every row is kept and `user` stays empty. With them, a
/// row is kept only when its other endpoint was loaded.
fn build_views(
    subject: UserId,
    rows: Vec<RelationModel>,
    profiles: Option<&HashMap<i32, LoadedProfile>>,
) -> Vec<UserRelationView> {
    rows.iter()
        .map(RelationModel::to_record)
        .filter_map(|record| {
            let pair = record.pair();
            let other = pair.other_than(subject)?;

            let mut view = UserRelationView {
                user: None,
                relation_type: record.relation_type,
                setting_high: None,
                setting_low: None,
                blocked: record.is_blocked(),
                user_id: other,
            };

            if let Some(profiles) = profiles {
                let settings_of = |id: UserId| profiles.get(&id.value()).and_then(|p| p.settings);

                view.user = Some(profiles.get(&other.value())?.profile.clone());
                view.setting_low = settings_of(pair.low());
                view.setting_high = settings_of(pair.high());
            }

            Some(view)
        })
        .collect()
}

#[async_trait]
impl RelationQuery for RelationQueryPostgres {
    async fn relations_for_user(
        &self,
        user_id: UserId,
        include_profile: bool,
    ) -> Result<Vec<UserRelationView>, RelationQueryError> {
        let rows = RelationEntity::find()
            .filter(
                Condition::any()
                    .add(RelationColumn::UserIdLow.eq(user_id.value()))
                    .add(RelationColumn::UserIdHigh.eq(user_id.value())),
            )
            .order_by_asc(RelationColumn::Id)
            .all(&*self.db)
            .await
            .map_err(database_error)?;

        if !include_profile || rows.is_empty() {
            let views = build_views(user_id, rows, None);
            debug!(%user_id, count = views.len(), include_profile, "loaded relations");
            return Ok(views);
        }

        let endpoints: BTreeSet<i32> = rows
            .iter()
            .flat_map(|r| [r.user_id_low, r.user_id_high])
            .collect();
        let endpoints: Vec<i32> = endpoints.into_iter().collect();

        let profiles = load_profiles(&*self.db, &endpoints)
            .await
            .map_err(database_error)?;

        let total = rows.len();
        let views = build_views(user_id, rows, Some(&profiles));
        debug!(
            %user_id,
            count = views.len(),
            dropped = total - views.len(),
            "loaded relations with profiles"
        );

        Ok(views)
    }

    async fn find_between(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<Option<RelationRecord>, RelationQueryError> {
        let pair = CanonicalPair::of(a, b);

        let row = RelationEntity::find()
            .filter(RelationColumn::UserIdLow.eq(pair.low().value()))
            .filter(RelationColumn::UserIdHigh.eq(pair.high().value()))
            .one(&*self.db)
            .await
            .map_err(database_error)?;

        Ok(row.map(|r| r.to_record()))
    }
}
