//! 通知消息构建器 - 组合颜色、文本、地址与透传字段

use super::address::resolve_address;
use super::color::Color;
use super::composer::ComposedText;
use super::message::{Attachment, WebhookMessage, MARKDOWN_FIELDS};
use crate::pipeline::Pipeline;
use crate::settings::Settings;

/// 通知消息构建器
pub struct NotificationBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> NotificationBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// 构建 webhook 消息（单个 attachment）
    pub fn build(&self, pipeline: &Pipeline, composed: ComposedText) -> WebhookMessage {
        let settings = self.settings;

        let attachment = Attachment {
            color: Color::resolve(&settings.color, &pipeline.build.status),
            text: composed.text,
            fallback: composed.fallback,
            image_url: settings.image_url.clone(),
            mrkdwn_in: MARKDOWN_FIELDS.iter().map(|f| f.to_string()).collect(),
        };

        WebhookMessage {
            channel: resolve_address(&settings.recipient, &settings.channel),
            username: settings.username.clone(),
            icon_url: settings.icon_url.clone(),
            icon_emoji: settings.icon_emoji.clone(),
            attachments: vec![attachment],
        }
    }
}
