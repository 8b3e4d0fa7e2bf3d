mod compose_home_page_service;

pub use compose_home_page_service::ComposeHomePageService;
