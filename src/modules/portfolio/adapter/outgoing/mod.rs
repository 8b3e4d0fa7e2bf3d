mod normalize;
pub mod raw_records;
mod static_portfolio_store;

pub use normalize::PortfolioLoadError;
pub use static_portfolio_store::StaticPortfolioStore;
