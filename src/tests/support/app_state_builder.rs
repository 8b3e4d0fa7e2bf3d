use actix_web::web;
use std::sync::Arc;

use crate::modules::assistant::application::ports::outgoing::AssistantApi;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetEducationUseCase, GetPortfolioUseCase, GetProjectUseCase,
};
use crate::modules::portfolio::application::service::{
    GetEducationService, GetPortfolioService, GetProjectService,
};
use crate::modules::site::application::ports::incoming::use_cases::ComposeHomePageUseCase;
use crate::modules::site::application::service::ComposeHomePageService;
use crate::tests::support::stubs::StubPortfolioQuery;
use crate::AppState;

/// Builds an `AppState` whose defaults are real services over the sample portfolio.
pub struct TestAppStateBuilder {
    get_portfolio: Option<Arc<dyn GetPortfolioUseCase + Send + Sync>>,
    get_project: Option<Arc<dyn GetProjectUseCase + Send + Sync>>,
    get_education: Option<Arc<dyn GetEducationUseCase + Send + Sync>>,
    compose_home_page: Option<Arc<dyn ComposeHomePageUseCase + Send + Sync>>,
    assistant_api: Option<Arc<dyn AssistantApi + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let query = StubPortfolioQuery::sample();
        Self {
            get_portfolio: Some(Arc::new(GetPortfolioService::new(query.clone()))),
            get_project: Some(Arc::new(GetProjectService::new(query.clone()))),
            get_education: Some(Arc::new(GetEducationService::new(query.clone()))),
            compose_home_page: Some(Arc::new(ComposeHomePageService::new(query))),
            assistant_api: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + Send + Sync + 'static) -> Self {
        self.get_project = Some(Arc::new(uc));
        self
    }

    pub fn with_get_education(
        mut self,
        uc: impl GetEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_education = Some(Arc::new(uc));
        self
    }

    pub fn with_compose_home_page(
        mut self,
        uc: impl ComposeHomePageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.compose_home_page = Some(Arc::new(uc));
        self
    }

    pub fn with_assistant_api(mut self, api: impl AssistantApi + Send + Sync + 'static) -> Self {
        self.assistant_api = Some(Arc::new(api));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get_portfolio: self.get_portfolio.expect("get_portfolio not set"),
                get_project: self.get_project.expect("get_project not set"),
                get_education: self.get_education.expect("get_education not set"),
            },
            compose_home_page: self.compose_home_page.expect("compose_home_page not set"),
            assistant_api: self.assistant_api,
        })
    }
}
