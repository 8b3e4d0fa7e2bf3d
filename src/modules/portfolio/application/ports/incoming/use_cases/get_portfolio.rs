use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::outgoing::PortfolioQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PortfolioQueryError> for GetPortfolioError {
    fn from(err: PortfolioQueryError) -> Self {
        match err {
            PortfolioQueryError::Unavailable(msg) => GetPortfolioError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<Arc<Portfolio>, GetPortfolioError>;
}
