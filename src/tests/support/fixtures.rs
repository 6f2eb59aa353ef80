//! Row builders shared by adapter tests running against `MockDatabase`.

use chrono::Utc;

use crate::modules::relation::adapter::outgoing::sea_orm_entity::{
    Model as RelationModel, RelationKind,
};
use crate::modules::user::adapter::outgoing::sea_orm_entity::{
    cities, countries, languages, settings, users,
};

pub fn user_model(id: i32, first_name: &str, last_name: &str) -> users::Model {
    let now = Utc::now().fixed_offset();

    users::Model {
        id,
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
        sex: None,
        birthday: None,
        is_active: true,
        timezone: Some("Europe/Berlin".to_string()),
        lat: Some(52.52),
        lng: Some(13.405),
        token: None,
        avatar: None,
        cover: None,
        provider_info: None,
        percent: Some(80),
        city_id: None,
        country_id: None,
        language_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn settings_model(
    id: i32,
    user_id: i32,
    match_strangers: Option<bool>,
    match_friends: Option<bool>,
) -> settings::Model {
    let now = Utc::now().fixed_offset();

    settings::Model {
        id,
        user_id,
        disable_notification_email: None,
        match_strangers,
        match_friends,
        created_at: now,
        updated_at: now,
    }
}

pub fn city_model(id: i32, name: &str) -> cities::Model {
    let now = Utc::now().fixed_offset();

    cities::Model {
        id,
        name: Some(name.to_string()),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn country_model(id: i32, name: &str, code: &str, is_default: bool) -> countries::Model {
    countries::Model {
        id,
        name: Some(name.to_string()),
        code: Some(code.to_string()),
        is_default,
        is_active: true,
    }
}

pub fn language_model(id: i32, name: &str, code: &str, is_default: bool) -> languages::Model {
    languages::Model {
        id,
        name: Some(name.to_string()),
        code: Some(code.to_string()),
        is_default,
        is_active: true,
    }
}

pub fn relation_model(
    id: i32,
    kind: RelationKind,
    user_id_low: i32,
    user_id_high: i32,
    blocked_low: bool,
    blocked_high: bool,
) -> RelationModel {
    let now = Utc::now().fixed_offset();

    RelationModel {
        id,
        kind,
        user_id_low,
        user_id_high,
        blocked_low,
        blocked_high,
        created_at: now,
        updated_at: now,
    }
}
