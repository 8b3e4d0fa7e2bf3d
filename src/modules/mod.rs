pub mod assistant;
pub mod portfolio;
pub mod site;
