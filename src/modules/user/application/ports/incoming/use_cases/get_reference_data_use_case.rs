use async_trait::async_trait;

use crate::modules::user::application::domain::ReferenceData;
use crate::modules::user::application::ports::outgoing::ReferenceQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetReferenceDataError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ReferenceQueryError> for GetReferenceDataError {
    fn from(err: ReferenceQueryError) -> Self {
        match err {
            ReferenceQueryError::DatabaseError(msg) => Self::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait GetReferenceDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<ReferenceData, GetReferenceDataError>;
}
