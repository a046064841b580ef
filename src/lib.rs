//! Pipeline Slack - 将 CI 流水线构建结果发送到 Slack incoming webhook

pub mod cli;
pub mod error;
pub mod notification;
pub mod pipeline;
pub mod plugin;
pub mod settings;

pub use error::{BoxError, DeliveryError, PluginError};
pub use notification::{
    Attachment, Color, ComposedText, MessageComposer, NotificationBuilder, TemplateRenderer,
    TeraRenderer, WebhookClient, WebhookMessage, WebhookSender,
};
pub use pipeline::{Build, Commit, Pipeline, Repo};
pub use plugin::Plugin;
pub use settings::{NetworkSettings, Settings};
