mod get_education_service;
mod get_portfolio_service;
mod get_project_service;

pub use get_education_service::GetEducationService;
pub use get_portfolio_service::GetPortfolioService;
pub use get_project_service::GetProjectService;
