use sea_orm::entity::prelude::*;

use crate::modules::user::application::domain::{
    full_name, LocaleNames, PartialSettings, PublicProfile, Settings, UserId,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<DateTimeWithTimeZone>,
    pub is_active: bool,
    pub timezone: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub lat: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub lng: Option<f64>,
    pub token: Option<String>,
    pub avatar: Option<String>,
    pub cover: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub provider_info: Option<Json>,
    pub percent: Option<i32>,
    pub city_id: Option<i32>,
    pub country_id: Option<i32>,
    pub language_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn full_name(&self) -> String {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Project onto the public profile; `setting` is resolved against the defaults.
    pub fn to_public_profile(
        &self,
        settings: Option<&PartialSettings>,
        names: LocaleNames,
    ) -> PublicProfile {
        PublicProfile {
            full_name: self.full_name(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            sex: self.sex.clone(),
            lat: self.lat,
            lng: self.lng,
            birthday: self.birthday.map(Into::into),
            token: self.token.clone(),
            avatar: self.avatar.clone(),
            city_id: self.city_id,
            country_id: self.country_id,
            timezone: self.timezone.clone(),
            language_id: self.language_id,
            city: names.city,
            country: names.country,
            language: names.language,
            provider_info: self.provider_info.clone(),
            percent: self.percent,
            cover: self.cover.clone(),
            setting: Settings::resolve(settings),
            id: UserId::from(self.id),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cities::Entity",
        from = "Column::CityId",
        to = "super::cities::Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    City,

    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Country,

    #[sea_orm(
        belongs_to = "super::languages::Entity",
        from = "Column::LanguageId",
        to = "super::languages::Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Language,

    #[sea_orm(has_one = "super::settings::Entity")]
    Settings,
}

impl Related<super::cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Settings.def()
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

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
