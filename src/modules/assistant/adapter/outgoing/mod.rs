mod assistant_api_http;

pub use assistant_api_http::AssistantApiHttp;
