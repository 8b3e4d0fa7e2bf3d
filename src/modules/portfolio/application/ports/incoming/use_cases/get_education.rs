use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Education;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEducationError {
    #[error("Education record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self, education_id: &str) -> Result<Education, GetEducationError>;
}
