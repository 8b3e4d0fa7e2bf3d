mod compose_home_page;

pub use compose_home_page::{ComposeHomePageError, ComposeHomePageUseCase};
