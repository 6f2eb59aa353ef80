use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::debug;

use crate::modules::user::application::domain::{PartialSettings, PublicProfile, UserId};
use crate::modules::user::application::ports::outgoing::{UserQuery, UserQueryError};

use super::profile_loader::load_profiles;
use super::sea_orm_entity::settings::{Column as SettingsColumn, Entity as SettingsEntity};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn get_public_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<PublicProfile>, UserQueryError> {
        let mut loaded = load_profiles(&*self.db, &[user_id.value()])
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let profile = loaded.remove(&user_id.value()).map(|l| l.profile);
        debug!(%user_id, found = profile.is_some(), "loaded public profile");

        Ok(profile)
    }

    async fn get_settings(
        &self,
        user_id: UserId,
    ) -> Result<Option<PartialSettings>, UserQueryError> {
        let row = SettingsEntity::find()
            .filter(SettingsColumn::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|s| s.to_partial()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::adapter::outgoing::sea_orm_entity::{settings, users};
    use crate::tests::support::fixtures::{settings_model, user_model};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    #[tokio::test]
    async fn test_get_public_profile_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(12, "Ada", "Lovelace")]])
            .append_query_results(vec![vec![settings_model(1, 12, None, Some(false))]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let profile = query
            .get_public_profile(UserId::from(12))
            .await
            .unwrap()
            .expect("profile");

        assert_eq!(profile.id, UserId::from(12));
        assert_eq!(profile.full_name, "Ada Lovelace");
        assert!(!profile.setting.match_friends);
        assert!(profile.setting.match_strangers);
    }

    #[tokio::test]
    async fn test_get_public_profile_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<users::Model>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let result = query.get_public_profile(UserId::from(99)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_public_profile_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let result = query.get_public_profile(UserId::from(1)).await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_get_settings_returns_raw_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![settings_model(4, 8, Some(false), None)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let settings = query.get_settings(UserId::from(8)).await.unwrap();

        assert_eq!(
            settings,
            Some(PartialSettings {
                disable_notification_email: None,
                match_strangers: Some(false),
                match_friends: None,
            })
        );
    }

    #[tokio::test]
    async fn test_get_settings_absent_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<settings::Model>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert_eq!(query.get_settings(UserId::from(8)).await.unwrap(), None);
    }
}
