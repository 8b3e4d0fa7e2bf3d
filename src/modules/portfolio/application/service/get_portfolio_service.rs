use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioUseCase for GetPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Arc<Portfolio>, GetPortfolioError> {
        self.query
            .portfolio()
            .await
            .map_err(GetPortfolioError::from)
    }
}
