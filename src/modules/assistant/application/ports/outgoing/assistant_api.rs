use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::assistant::application::domain::entities::{
    ApiStats, ChatResponse, HealthStatus, RefreshResult,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssistantApiError {
    #[error("Assistant backend unreachable: {0}")]
    Transport(String),

    #[error("Assistant backend returned status {0}")]
    Status(u16),

    #[error("Assistant backend sent an unreadable body: {0}")]
    Decode(String),
}

/// Client for the portfolio assistant backend. One request per call, no retries.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn send_chat_message(
        &self,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<ChatResponse, AssistantApiError>;

    async fn get_stats(&self) -> Result<ApiStats, AssistantApiError>;

    async fn get_health(&self) -> Result<HealthStatus, AssistantApiError>;

    async fn refresh_database(&self) -> Result<RefreshResult, AssistantApiError>;
}
