use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Project;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

pub struct GetProjectService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetProjectService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectUseCase for GetProjectService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, project_id: &str) -> Result<Project, GetProjectError> {
        let project = self
            .query
            .find_project(project_id)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::Unavailable(msg) => GetProjectError::RepositoryError(msg),
            })?;

        project.ok_or(GetProjectError::NotFound)
    }
}
