//! Slack incoming webhook 消息载荷
//!
//! ```json
//! {
//!   "channel": "#dev",
//!   "username": "drone",
//!   "icon_emoji": ":rocket:",
//!   "attachments": [{
//!     "color": "good",
//!     "text": "*success* <http://ci/1|octocat/hello#e3b0c442> (main) by Mona",
//!     "fallback": "success octocat/hello#e3b0c442 (main) by Mona",
//!     "mrkdwn_in": ["text", "fallback"]
//!   }]
//! }
//! ```

use serde::Serialize;

use super::color::Color;

/// 按 mrkdwn 解析的 attachment 字段
pub const MARKDOWN_FIELDS: [&str; 2] = ["text", "fallback"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub color: Color,
    pub text: String,
    pub fallback: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    pub mrkdwn_in: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_emoji: String,
    pub attachments: Vec<Attachment>,
}
