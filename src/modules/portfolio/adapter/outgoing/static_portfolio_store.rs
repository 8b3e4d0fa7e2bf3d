use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::modules::portfolio::adapter::outgoing::normalize::{
    normalize_portfolio, PortfolioLoadError,
};
use crate::modules::portfolio::adapter::outgoing::raw_records::RawPortfolio;
use crate::modules::portfolio::application::domain::entities::{Education, Portfolio, Project};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

/// Portfolio document compiled into the binary.
const EMBEDDED_PORTFOLIO: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/portfolio.json"
));

/// In-memory store. Loaded and normalised once; every read is a clone of
/// immutable data.
#[derive(Clone)]
pub struct StaticPortfolioStore {
    portfolio: Arc<Portfolio>,
}

impl StaticPortfolioStore {
    pub fn embedded() -> Result<Self, PortfolioLoadError> {
        Self::from_json(EMBEDDED_PORTFOLIO)
    }

    pub fn from_file(path: &Path) -> Result<Self, PortfolioLoadError> {
        let json = std::fs::read_to_string(path).map_err(|e| PortfolioLoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, PortfolioLoadError> {
        let raw: RawPortfolio =
            serde_json::from_str(json).map_err(|e| PortfolioLoadError::Parse(e.to_string()))?;
        let portfolio = normalize_portfolio(raw)?;

        info!(
            "Portfolio loaded: {} projects, {} experience, {} education, {} certifications, {} hackathons, {} timeline entries",
            portfolio.projects.len(),
            portfolio.experience.len(),
            portfolio.education.len(),
            portfolio.certifications.len(),
            portfolio.hackathons.len(),
            portfolio.timeline.len(),
        );

        Ok(Self {
            portfolio: Arc::new(portfolio),
        })
    }

    /// Optional override file, else the embedded document.
    pub fn load(override_path: Option<&Path>) -> Result<Self, PortfolioLoadError> {
        match override_path {
            Some(path) => Self::from_file(path),
            None => Self::embedded(),
        }
    }
}

#[async_trait]
impl PortfolioQuery for StaticPortfolioStore {
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
