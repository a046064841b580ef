//! 插件执行入口 - 校验配置、组装消息并发送

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::{PluginError, Result};
use crate::notification::{
    MessageComposer, NotificationBuilder, TemplateRenderer, WebhookMessage, WebhookSender,
};
use crate::pipeline::Pipeline;
use crate::settings::Settings;

/// Slack 通知插件
pub struct Plugin<R, S> {
    settings: Settings,
    pipeline: Pipeline,
    renderer: R,
    sender: S,
}

impl<R, S> Plugin<R, S>
where
    R: TemplateRenderer,
    S: WebhookSender,
{
    pub fn new(settings: Settings, pipeline: Pipeline, renderer: R, sender: S) -> Self {
        Self {
            settings,
            pipeline,
            renderer,
            sender,
        }
    }

    /// 校验配置，只要求 webhook 非空
    pub fn validate(&self) -> Result<()> {
        if self.settings.webhook.is_empty() {
            return Err(PluginError::MissingWebhook);
        }

        Ok(())
    }

    /// 组装消息但不发送（dry-run 也走这里）
    pub async fn compose(&self, cancel: &CancellationToken) -> Result<WebhookMessage> {
        let composed = MessageComposer::new(&self.renderer)
            .compose(&self.settings, &self.pipeline, cancel)
            .await?;

        Ok(NotificationBuilder::new(&self.settings).build(&self.pipeline, composed))
    }

    /// 组装并发送，只尝试一次
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<()> {
        let message = self.compose(cancel).await?;

        info!(
            channel = message.channel.as_deref().unwrap_or_default(),
            username = %message.username,
            text = message.attachments.first().map(|a| a.text.as_str()).unwrap_or_default(),
            "sending message"
        );

        self.sender
            .send(&self.settings.webhook, &message, cancel)
            .await?;

        Ok(())
    }
}
