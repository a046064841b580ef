//! 插件配置
//!
//! 所有字段为空字符串即视为未设置。通过 `PLUGIN_*` 环境变量或命令行参数填充。

use clap::Args;
use std::time::Duration;

/// 单次通知的插件配置
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Slack incoming webhook URL
    #[arg(long, env = "PLUGIN_WEBHOOK", default_value = "", hide_env_values = true)]
    pub webhook: String,

    /// 频道（不带 # 也可）
    #[arg(long, env = "PLUGIN_CHANNEL", default_value = "")]
    pub channel: String,

    /// 私信接收者，优先于频道
    #[arg(long, env = "PLUGIN_RECIPIENT", default_value = "")]
    pub recipient: String,

    #[arg(long, env = "PLUGIN_USERNAME", default_value = "")]
    pub username: String,

    /// 消息模板
    #[arg(long, env = "PLUGIN_TEMPLATE", default_value = "")]
    pub template: String,

    /// 模板文件，设置后覆盖 --template
    #[arg(long, env = "PLUGIN_TEMPLATE_FILE", default_value = "")]
    pub template_file: String,

    /// 回退文本模板
    #[arg(long, env = "PLUGIN_FALLBACK", default_value = "")]
    pub fallback: String,

    #[arg(long, env = "PLUGIN_IMAGE_URL", default_value = "")]
    pub image_url: String,

    #[arg(long, env = "PLUGIN_ICON_URL", default_value = "")]
    pub icon_url: String,

    #[arg(long, env = "PLUGIN_ICON_EMOJI", default_value = "")]
    pub icon_emoji: String,

    /// 覆盖根据构建状态选择的颜色
    #[arg(long, env = "PLUGIN_COLOR", default_value = "")]
    pub color: String,
}

/// HTTP 传输配置
#[derive(Args, Debug, Clone, PartialEq)]
pub struct NetworkSettings {
    /// 请求超时时间 (秒)
    #[arg(long = "timeout", env = "PLUGIN_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,

    /// 跳过 TLS 证书校验
    #[arg(long, env = "PLUGIN_SKIP_VERIFY")]
    pub skip_verify: bool,
}

impl NetworkSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            skip_verify: false,
        }
    }
}
