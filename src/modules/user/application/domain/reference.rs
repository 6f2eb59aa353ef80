use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    pub name: Option<String>,
    pub code: Option<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: i32,
    pub name: Option<String>,
    pub code: Option<String>,
    pub is_default: bool,
}

/// Active lookup rows offered to clients when editing a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub countries: Vec<Country>,
    pub languages: Vec<Language>,
    pub cities: Vec<City>,
    pub default_language: Option<Language>,
}
