use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{Education, Portfolio, Project};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};
use crate::tests::support::portfolio_fixtures::sample_portfolio;

/// In-memory `PortfolioQuery` over a fixed portfolio.
#[derive(Clone)]
pub struct StubPortfolioQuery {
    portfolio: Arc<Portfolio>,
}

impl StubPortfolioQuery {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_portfolio())
    }
}

#[async_trait]
impl PortfolioQuery for StubPortfolioQuery {
    async fn portfolio(&self) -> Result<Arc<Portfolio>, PortfolioQueryError> {
        Ok(Arc::clone(&self.portfolio))
    }

    async fn find_project(&self, id: &str) -> Result<Option<Project>, PortfolioQueryError> {
        Ok(self.portfolio.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn find_education(&self, id: &str) -> Result<Option<Education>, PortfolioQueryError> {
        Ok(self.portfolio.education.iter().find(|e| e.id == id).cloned())
    }
}
