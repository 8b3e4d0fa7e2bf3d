use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::assistant::application::domain::entities::{
    ApiStats, ChatRequest, ChatResponse, HealthStatus, RefreshResult,
};
use crate::modules::assistant::application::ports::outgoing::{AssistantApi, AssistantApiError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// reqwest-backed assistant client. Holds one pooled `Client`; cheap to clone.
#[derive(Debug, Clone)]
pub struct AssistantApiHttp {
    client: Client,
    base_url: String,
}

impl AssistantApiHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AssistantApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AssistantApiError::Transport(e.to_string()))?;

        let base_url = match base_url.trim().trim_end_matches('/') {
            "" => DEFAULT_BASE_URL.to_string(),
            url => url.to_string(),
        };

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, AssistantApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Assistant request {} failed: {}", path, e);
            AssistantApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Assistant request {} returned {}", path, status);
            return Err(AssistantApiError::Status(status.as_u16()));
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| AssistantApiError::Decode(e.to_string()))?;

        debug!("Assistant request {} succeeded", path);
        Ok(body)
    }
}

#[async_trait]
impl AssistantApi for AssistantApiHttp {
    async fn send_chat_message(
        &self,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<ChatResponse, AssistantApiError> {
        let body = ChatRequest {
            message: message.to_string(),
            session_id,
        };
        self.send(self.client.post(self.url("/chat")).json(&body), "/chat")
            .await
    }

    async fn get_stats(&self) -> Result<ApiStats, AssistantApiError> {
        self.send(self.client.get(self.url("/stats")), "/stats").await
    }

    async fn get_health(&self) -> Result<HealthStatus, AssistantApiError> {
        self.send(self.client.get(self.url("/health")), "/health")
            .await
    }

    async fn refresh_database(&self) -> Result<RefreshResult, AssistantApiError> {
        self.send(self.client.post(self.url("/refresh")), "/refresh")
            .await
    }
}
