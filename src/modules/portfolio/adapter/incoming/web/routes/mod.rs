mod get_portfolio;
mod get_single_education;
mod get_single_project;

pub use get_portfolio::{__path_get_portfolio_handler, get_portfolio_handler};
pub use get_single_education::{
    __path_get_single_education_handler, get_single_education_handler,
};
pub use get_single_project::{__path_get_single_project_handler, get_single_project_handler};
