use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<Project, GetProjectError>;
}
