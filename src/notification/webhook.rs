//! Slack Webhook 客户端模块
//!
//! 通过 HTTP POST 将消息发送到 incoming webhook，只尝试一次，不重试。

use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::message::WebhookMessage;
use crate::error::DeliveryError;
use crate::settings::NetworkSettings;

/// Webhook 发送 trait
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// 发送消息到 `url`，`cancel` 触发时中止请求
    async fn send(
        &self,
        url: &str,
        message: &WebhookMessage,
        cancel: &CancellationToken,
    ) -> Result<(), DeliveryError>;
}

/// Slack Webhook 客户端
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// 创建新的 Webhook 客户端
    pub fn new(network: &NetworkSettings) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(network.timeout())
            .danger_accept_invalid_certs(network.skip_verify)
            .build()?;

        Ok(Self { client })
    }

    async fn post(&self, url: &str, body: String) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        // 响应体读取失败也算发送失败
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), response = %body, "webhook delivered");
        Ok(())
    }
}

#[async_trait]
impl WebhookSender for WebhookClient {
    async fn send(
        &self,
        url: &str,
        message: &WebhookMessage,
        cancel: &CancellationToken,
    ) -> Result<(), DeliveryError> {
        let body = serde_json::to_string(message)?;
        debug!(payload = %body, "webhook payload");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DeliveryError::Cancelled),
            result = self.post(url, body) => result,
        }
    }
}
