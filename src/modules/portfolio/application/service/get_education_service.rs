use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Education;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetEducationError, GetEducationUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

pub struct GetEducationService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetEducationService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetEducationUseCase for GetEducationService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, education_id: &str) -> Result<Education, GetEducationError> {
        let education = self
            .query
            .find_education(education_id)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::Unavailable(msg) => GetEducationError::RepositoryError(msg),
            })?;

        education.ok_or(GetEducationError::NotFound)
    }
}
