//! 通知组装与发送
//!
//! # 组成
//! 1. `color` / `reference` / `address`：颜色、短引用、目标地址
//! 2. `composer`：正文与回退文本（模板或默认格式）
//! 3. `builder`：组装 Slack webhook 消息
//! 4. `webhook`：`WebhookSender` trait 与 reqwest 实现
//!
//! # 使用示例
//! ```ignore
//! use pipeline_slack::notification::{MessageComposer, NotificationBuilder, TeraRenderer};
//!
//! let renderer = TeraRenderer::new();
//! let composed = MessageComposer::new(&renderer).compose(&settings, &pipeline, &cancel).await?;
//! let message = NotificationBuilder::new(&settings).build(&pipeline, composed);
//! ```

pub mod address;
pub mod builder;
pub mod color;
pub mod composer;
pub mod message;
pub mod reference;
pub mod template;
pub mod webhook;

pub use address::resolve_address;
pub use builder::NotificationBuilder;
pub use color::Color;
pub use composer::{default_fallback, default_message, ComposedText, MessageComposer};
pub use message::{Attachment, WebhookMessage};
pub use reference::detect_ref;
pub use template::{TemplateRenderer, TeraRenderer};
pub use webhook::{WebhookClient, WebhookSender};
