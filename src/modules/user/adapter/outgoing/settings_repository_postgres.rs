use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{DatabaseConnection, EntityTrait, IdenStatic, Set};
use std::sync::Arc;
use tracing::info;

use crate::modules::user::application::domain::{PartialSettings, UserId};
use crate::modules::user::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};

use super::sea_orm_entity::settings::{
    ActiveModel as SettingsActiveModel, Column as SettingsColumn, Entity as SettingsEntity,
};

#[derive(Clone, Debug)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Take the incoming value when the patch sets it, otherwise keep the stored one.
fn patched_or_stored(column: SettingsColumn) -> SimpleExpr {
    let name = column.as_str();
    Expr::cust(format!(r#"COALESCE("excluded"."{name}", "settings"."{name}")"#))
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn save_settings(
        &self,
        user_id: UserId,
        patch: PartialSettings,
    ) -> Result<PartialSettings, SettingsRepositoryError> {
        let active = SettingsActiveModel {
            id: NotSet,
            user_id: Set(user_id.value()),
            disable_notification_email: Set(patch.disable_notification_email),
            match_strangers: Set(patch.match_strangers),
            match_friends: Set(patch.match_friends),
            created_at: NotSet,
            updated_at: NotSet,
        };

        // One statement: a concurrent first save lands in the conflict branch
        // and unpatched keys are never rewritten from a stale read
        let saved = SettingsEntity::insert(active)
            .on_conflict(
                OnConflict::column(SettingsColumn::UserId)
                    .value(
                        SettingsColumn::DisableNotificationEmail,
                        patched_or_stored(SettingsColumn::DisableNotificationEmail),
                    )
                    .value(
                        SettingsColumn::MatchStrangers,
                        patched_or_stored(SettingsColumn::MatchStrangers),
                    )
                    .value(
                        SettingsColumn::MatchFriends,
                        patched_or_stored(SettingsColumn::MatchFriends),
                    )
                    .value(SettingsColumn::UpdatedAt, Expr::current_timestamp())
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| SettingsRepositoryError::DatabaseError(e.to_string()))?;

        info!(%user_id, "settings saved");
        Ok(saved.to_partial())
    }
}
