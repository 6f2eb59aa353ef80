use async_trait::async_trait;

use crate::modules::user::application::domain::ReferenceData;
use crate::modules::user::application::ports::{
    incoming::use_cases::{GetReferenceDataError, GetReferenceDataUseCase},
    outgoing::ReferenceQuery,
};

#[derive(Debug, Clone)]
pub struct GetReferenceDataService<Q>
where
    Q: ReferenceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReferenceDataService<Q>
where
    Q: ReferenceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReferenceDataUseCase for GetReferenceDataService<Q>
where
    Q: ReferenceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ReferenceData, GetReferenceDataError> {
        Ok(ReferenceData {
            countries: self.query.active_countries().await?,
            languages: self.query.active_languages().await?,
            cities: self.query.active_cities().await?,
            default_language: self.query.default_language().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::application::domain::{City, Country, Language};
    use crate::modules::user::application::ports::outgoing::ReferenceQueryError;

    #[derive(Clone)]
    struct MockReferenceQuery {
        fail: bool,
    }

    fn english() -> Language {
        Language {
            id: 1,
            name: Some("English".into()),
            code: Some("en".into()),
            is_default: true,
        }
    }

    #[async_trait]
    impl ReferenceQuery for MockReferenceQuery {
        async fn active_countries(&self) -> Result<Vec<Country>, ReferenceQueryError> {
            if self.fail {
                return Err(ReferenceQueryError::DatabaseError("offline".into()));
            }
            Ok(vec![Country {
                id: 1,
                name: Some("Ireland".into()),
                code: Some("IE".into()),
                is_default: true,
            }])
        }

        async fn active_languages(&self) -> Result<Vec<Language>, ReferenceQueryError> {
            Ok(vec![english()])
        }

        async fn active_cities(&self) -> Result<Vec<City>, ReferenceQueryError> {
            Ok(vec![City {
                id: 1,
                name: Some("Dublin".into()),
            }])
        }

        async fn default_language(&self) -> Result<Option<Language>, ReferenceQueryError> {
            Ok(Some(english()))
        }

        async fn default_country(&self) -> Result<Option<Country>, ReferenceQueryError> {
            unimplemented!("not used")
        }
    }

    #[tokio::test]
    async fn collects_all_lookup_lists() {
        let service = GetReferenceDataService::new(MockReferenceQuery { fail: false });

        let data = service.execute().await.unwrap();

        assert_eq!(data.countries.len(), 1);
        assert_eq!(data.languages, vec![english()]);
        assert_eq!(data.cities[0].name.as_deref(), Some("Dublin"));
        assert_eq!(data.default_language, Some(english()));
    }

    #[tokio::test]
    async fn first_failure_is_reported() {
        let service = GetReferenceDataService::new(MockReferenceQuery { fail: true });

        assert!(matches!(
            service.execute().await,
            Err(GetReferenceDataError::QueryError(_))
        ));
    }
}
