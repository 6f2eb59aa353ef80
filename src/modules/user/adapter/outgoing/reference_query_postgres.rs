use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::user::application::domain::{City, Country, Language};
use crate::modules::user::application::ports::outgoing::{ReferenceQuery, ReferenceQueryError};

use super::sea_orm_entity::{cities, countries, languages};

#[derive(Debug, Clone)]
pub struct ReferenceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReferenceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceQuery for ReferenceQueryPostgres {
    async fn active_countries(&self) -> Result<Vec<Country>, ReferenceQueryError> {
        let rows = countries::Entity::find()
            .filter(countries::Column::IsActive.eq(true))
            .order_by_asc(countries::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(countries::Model::to_domain).collect())
    }

    async fn active_languages(&self) -> Result<Vec<Language>, ReferenceQueryError> {
        let rows = languages::Entity::find()
            .filter(languages::Column::IsActive.eq(true))
            .order_by_asc(languages::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(languages::Model::to_domain).collect())
    }

    async fn active_cities(&self) -> Result<Vec<City>, ReferenceQueryError> {
        let rows = cities::Entity::find()
            .filter(cities::Column::IsActive.eq(true))
            .order_by_asc(cities::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(cities::Model::to_domain).collect())
    }

    async fn default_language(&self) -> Result<Option<Language>, ReferenceQueryError> {
        let row = languages::Entity::find()
            .filter(languages::Column::IsDefault.eq(true))
            .filter(languages::Column::IsActive.eq(true))
            .order_by_asc(languages::Column::Id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.as_ref().map(languages::Model::to_domain))
    }

    async fn default_country(&self) -> Result<Option<Country>, ReferenceQueryError> {
        let row = countries::Entity::find()
            .filter(countries::Column::IsDefault.eq(true))
            .filter(countries::Column::IsActive.eq(true))
            .order_by_asc(countries::Column::Id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.as_ref().map(countries::Model::to_domain))
    }
}

fn map_db_err(e: DbErr) -> ReferenceQueryError {
    ReferenceQueryError::DatabaseError(e.to_string())
}
