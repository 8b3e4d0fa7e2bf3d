use async_trait::async_trait;
use tracing::debug;

use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::modules::site::application::domain::{HomePage, Selection};
use crate::modules::site::application::ports::incoming::use_cases::{
    ComposeHomePageError, ComposeHomePageUseCase,
};

pub struct ComposeHomePageService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> ComposeHomePageService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ComposeHomePageUseCase for ComposeHomePageService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, selection: Selection) -> Result<HomePage, ComposeHomePageError> {
        let portfolio = self.query.portfolio().await?;

        let selected_project = selection.project.as_deref().and_then(|id| {
            let found = portfolio.projects.iter().find(|p| p.id == id).cloned();
            if found.is_none() {
                debug!("Selected project id={} matches no record", id);
            }
            found
        });

        let selected_education = selection.education.as_deref().and_then(|id| {
            let found = portfolio.education.iter().find(|e| e.id == id).cloned();
            if found.is_none() {
                debug!("Selected education id={} matches no record", id);
            }
            found
        });

        Ok(HomePage {
            portfolio,
            selection,
            selected_project,
            selected_education,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::modules::portfolio::application::domain::entities::{
        Education, Portfolio, Project,
    };
    use crate::modules::portfolio::application::ports::outgoing::PortfolioQueryError;
    use crate::tests::support::portfolio_fixtures::sample_portfolio;

    /* --------------------------------------------------
     * Mock PortfolioQuery
     * -------------------------------------------------- */

    struct MockPortfolioQuery {
        result: Result<Arc<Portfolio>, PortfolioQueryError>,
    }

    impl MockPortfolioQuery {
        fn with_sample() -> Self {
            Self {
                result: Ok(Arc::new(sample_portfolio())),
            }
        }
    }

    #[async_trait]
    impl PortfolioQuery for MockPortfolioQuery {
        async fn portfolio(&self) -> Result<Arc<Portfolio>, PortfolioQueryError> {
            self.result.clone()
        }

        async fn find_project(&self, _id: &str) -> Result<Option<Project>, PortfolioQueryError> {
            unimplemented!("not used in ComposeHomePageService tests")
        }

        async fn find_education(
            &self,
            _id: &str,
        ) -> Result<Option<Education>, PortfolioQueryError> {
            unimplemented!("not used in ComposeHomePageService tests")
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn no_selection_resolves_no_overlays() {
        let service = ComposeHomePageService::new(MockPortfolioQuery::with_sample());

        let page = service.execute(Selection::default()).await.unwrap();

        assert!(page.selected_project.is_none());
        assert!(page.selected_education.is_none());
        assert_eq!(page.portfolio.projects.len(), 2);
    }

    #[tokio::test]
    async fn both_selections_resolve_independently() {
        let service = ComposeHomePageService::new(MockPortfolioQuery::with_sample());
        let selection = Selection::default()
            .with_project("smart-renamer")
            .with_education("ktu-btech");

        let page = service.execute(selection.clone()).await.unwrap();

        assert_eq!(page.selected_project.unwrap().id, "smart-renamer");
        assert_eq!(page.selected_education.unwrap().id, "ktu-btech");
        assert_eq!(page.selection, selection);
    }

    #[tokio::test]
    async fn unknown_ids_resolve_to_no_overlay() {
        let service = ComposeHomePageService::new(MockPortfolioQuery::with_sample());
        let selection = Selection::default()
            .with_project("ghost")
            .with_education("leicester-msc");

        let page = service.execute(selection).await.unwrap();

        assert!(page.selected_project.is_none());
        assert_eq!(page.selected_education.unwrap().id, "leicester-msc");
    }

    #[tokio::test]
    async fn query_failure_maps_to_query_failed() {
        let service = ComposeHomePageService::new(MockPortfolioQuery {
            result: Err(PortfolioQueryError::Unavailable("gone".to_string())),
        });

        let err = service.execute(Selection::default()).await.unwrap_err();

        assert!(matches!(err, ComposeHomePageError::QueryFailed(msg) if msg == "gone"));
    }
}
