//! 错误类型定义
//!
//! 每个阶段只会产生一种错误，失败的阶段体现在错误信息中。

use std::path::PathBuf;

/// 模板引擎等外部能力返回的错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 插件执行错误
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("missing webhook")]
    MissingWebhook,

    #[error("could not read template file {}: {source}", .path.display())]
    TemplateFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create {target} message: {source}")]
    TemplateRender {
        /// `text` 或 `fallback`
        target: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("could not send webhook: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Webhook 发送错误
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_stage() {
        assert_eq!(PluginError::MissingWebhook.to_string(), "missing webhook");

        let err = PluginError::TemplateRender {
            target: "fallback",
            source: "unexpected token".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not create fallback message: unexpected token"
        );

        let err = PluginError::from(DeliveryError::Status {
            status: 404,
            body: "no_service".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "could not send webhook: webhook returned 404: no_service"
        );
    }

    #[test]
    fn test_template_file_error_keeps_io_source() {
        let err = PluginError::TemplateFileRead {
            path: PathBuf::from("/tmp/missing.tpl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.tpl"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "not found");
    }
}
