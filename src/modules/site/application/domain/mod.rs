mod home_page;
mod selection;

pub use home_page::HomePage;
pub use selection::Selection;
