mod get_education;
mod get_portfolio;
mod get_project;

pub use get_education::{GetEducationError, GetEducationUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_project::{GetProjectError, GetProjectUseCase};
