mod assistant_api;

pub use assistant_api::{AssistantApi, AssistantApiError};
