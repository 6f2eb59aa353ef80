use sea_orm::entity::prelude::*;

use crate::modules::user::application::domain::Language;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "language")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub code: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
}

impl Model {
    pub fn to_domain(&self) -> Language {
        Language {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            is_default: self.is_default,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
