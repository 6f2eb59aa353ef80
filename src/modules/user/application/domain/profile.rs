use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Settings, UserId};

/// Privacy-filtered projection of a user, the only shape exposed to other users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub sex: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub birthday: Option<DateTime<Utc>>,
    pub token: Option<String>,
    pub avatar: Option<String>,
    pub city_id: Option<i32>,
    pub country_id: Option<i32>,
    pub timezone: Option<String>,
    pub language_id: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub provider_info: Option<Value>,
    pub percent: Option<i32>,
    pub cover: Option<String>,
    pub setting: Settings,
    pub id: UserId,
}

/// Display names of the lookup rows a user references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleNames {
    pub city: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
}

/// First and last name joined by a space; a missing part counts as empty.
pub fn full_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    )
    .trim()
    .to_string()
}
