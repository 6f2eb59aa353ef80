use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::{BTreeSet, HashMap};

use crate::modules::user::application::domain::{LocaleNames, PartialSettings, PublicProfile};

use super::sea_orm_entity::{cities, countries, languages, settings, users};

/// A user loaded together with everything its public profile needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub profile: PublicProfile,
    /// The raw settings row, `None` when the user never saved settings.
    pub settings: Option<PartialSettings>,
}

/// Batch-load users with their settings and lookup names, keyed by user id.
///
/// Issues at most five queries regardless of how many ids are requested:
/// users, settings, then cities, countries and languages (each skipped when
/// no loaded user references that table). Ids with no matching user are
/// simply absent from the result.
pub async fn load_profiles<C>(
    db: &C,
    user_ids: &[i32],
) -> Result<HashMap<i32, LoadedProfile>, DbErr>
where
    C: ConnectionTrait,
{
    let wanted: BTreeSet<i32> = user_ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(HashMap::new());
    }

    let users = users::Entity::find()
        .filter(users::Column::Id.is_in(wanted))
        .all(db)
        .await?;
    if users.is_empty() {
        return Ok(HashMap::new());
    }

    let found: Vec<i32> = users.iter().map(|u| u.id).collect();
    let mut settings_by_user: HashMap<i32, PartialSettings> = settings::Entity::find()
        .filter(settings::Column::UserId.is_in(found))
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.user_id, s.to_partial()))
        .collect();

    let city_ids: BTreeSet<i32> = users.iter().filter_map(|u| u.city_id).collect();
    let country_ids: BTreeSet<i32> = users.iter().filter_map(|u| u.country_id).collect();
    let language_ids: BTreeSet<i32> = users.iter().filter_map(|u| u.language_id).collect();

    let city_names: HashMap<i32, Option<String>> = if city_ids.is_empty() {
        HashMap::new()
    } else {
        cities::Entity::find()
            .filter(cities::Column::Id.is_in(city_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect()
    };

    let country_names: HashMap<i32, Option<String>> = if country_ids.is_empty() {
        HashMap::new()
    } else {
        countries::Entity::find()
            .filter(countries::Column::Id.is_in(country_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect()
    };

    let language_names: HashMap<i32, Option<String>> = if language_ids.is_empty() {
        HashMap::new()
    } else {
        languages::Entity::find()
            .filter(languages::Column::Id.is_in(language_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|l| (l.id, l.name))
            .collect()
    };

    let name_of = |names: &HashMap<i32, Option<String>>, id: Option<i32>| {
        id.and_then(|id| names.get(&id).cloned().flatten())
    };

    Ok(users
        .into_iter()
        .map(|user| {
            let settings = settings_by_user.remove(&user.id);
            let names = LocaleNames {
                city: name_of(&city_names, user.city_id),
                country: name_of(&country_names, user.country_id),
                language: name_of(&language_names, user.language_id),
            };
            let profile = user.to_public_profile(settings.as_ref(), names);

            (user.id, LoadedProfile { profile, settings })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::application::domain::UserId;
    use crate::tests::support::fixtures::{
        city_model, country_model, language_model, settings_model, user_model,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    #[tokio::test]
    async fn empty_id_list_runs_no_query() {
        // No results appended: any query would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let loaded = load_profiles(&db, &[]).await.unwrap();

        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn loads_users_with_settings_and_no_lookups() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                user_model(5, "Ada", "Lovelace"),
                user_model(9, "Alan", "Turing"),
            ]])
            .append_query_results(vec![vec![settings_model(1, 9, Some(false), None)]])
            .into_connection();

        let loaded = load_profiles(&db, &[5, 9, 5]).await.unwrap();

        assert_eq!(loaded.len(), 2);

        let ada = &loaded[&5];
        assert_eq!(ada.profile.id, UserId::from(5));
        assert_eq!(ada.settings, None);
        assert!(ada.profile.setting.match_strangers);

        let alan = &loaded[&9];
        assert_eq!(
            alan.settings,
            Some(PartialSettings {
                disable_notification_email: None,
                match_strangers: Some(false),
                match_friends: None,
            })
        );
        assert!(!alan.profile.setting.match_strangers);
        assert!(alan.profile.setting.match_friends);
    }

    #[tokio::test]
    async fn resolves_lookup_names() {
        let mut user = user_model(3, "Grace", "Hopper");
        user.city_id = Some(10);
        user.country_id = Some(20);
        user.language_id = Some(30);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user]])
            .append_query_results(vec![Vec::<settings::Model>::new()])
            .append_query_results(vec![vec![city_model(10, "Arlington")]])
            .append_query_results(vec![vec![country_model(20, "United States", "US", true)]])
            .append_query_results(vec![vec![language_model(30, "English", "en", true)]])
            .into_connection();

        let loaded = load_profiles(&db, &[3]).await.unwrap();
        let profile = &loaded[&3].profile;

        assert_eq!(profile.city.as_deref(), Some("Arlington"));
        assert_eq!(profile.country.as_deref(), Some("United States"));
        assert_eq!(profile.language.as_deref(), Some("English"));
    }

    #[tokio::test]
    async fn unknown_ids_yield_empty_map() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<users::Model>::new()])
            .into_connection();

        let loaded = load_profiles(&db, &[404]).await.unwrap();

        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn database_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".into()))])
            .into_connection();

        assert!(load_profiles(&db, &[1]).await.is_err());
    }
}
