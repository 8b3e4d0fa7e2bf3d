use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetEducationUseCase, GetPortfolioUseCase, GetProjectUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_project: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub get_education: Arc<dyn GetEducationUseCase + Send + Sync>,
}
