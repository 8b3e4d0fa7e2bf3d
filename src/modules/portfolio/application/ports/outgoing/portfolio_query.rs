// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::application::domain::entities::{Education, Portfolio, Project};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Portfolio data unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// The complete portfolio, every collection in authored order.
    async fn portfolio(&self) -> Result<Arc<Portfolio>, PortfolioQueryError>;

    async fn find_project(&self, id: &str) -> Result<Option<Project>, PortfolioQueryError>;

    async fn find_education(&self, id: &str) -> Result<Option<Education>, PortfolioQueryError>;
}
