use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioQueryError;
use crate::modules::site::application::domain::{HomePage, Selection};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ComposeHomePageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PortfolioQueryError> for ComposeHomePageError {
    fn from(e: PortfolioQueryError) -> Self {
        match e {
            PortfolioQueryError::Unavailable(msg) => ComposeHomePageError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ComposeHomePageUseCase: Send + Sync {
    async fn execute(&self, selection: Selection) -> Result<HomePage, ComposeHomePageError>;
}
