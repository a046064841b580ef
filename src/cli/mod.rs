//! CLI command handling

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::notification::{TeraRenderer, WebhookClient};
use crate::pipeline::Pipeline;
use crate::plugin::Plugin;
use crate::settings::{NetworkSettings, Settings};

/// Drone 插件命令行参数，均可通过环境变量提供
#[derive(Parser, Debug)]
#[command(name = "pipeline-slack")]
#[command(about = "Send CI pipeline build notifications to a Slack webhook")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    /// `PLUGIN_WEBHOOK` 未设置时使用（secret 常以此名注入）
    #[arg(long, env = "SLACK_WEBHOOK", hide = true, hide_env_values = true)]
    pub slack_webhook: Option<String>,

    #[command(flatten)]
    pub network: NetworkSettings,

    #[command(flatten)]
    pub pipeline: Pipeline,

    /// 只打印消息 JSON，不发送
    #[arg(long, env = "PLUGIN_DRY_RUN")]
    pub dry_run: bool,
}

impl Cli {
    /// 合并 webhook 别名后的最终配置
    pub fn resolved_settings(&self) -> Settings {
        let mut settings = self.settings.clone();
        if settings.webhook.is_empty() {
            if let Some(webhook) = &self.slack_webhook {
                settings.webhook = webhook.clone();
            }
        }
        settings
    }
}

/// 执行插件：校验 → 组装 → 发送（或 dry-run 打印）
pub async fn run(cli: Cli, cancel: CancellationToken) -> Result<()> {
    let settings = cli.resolved_settings();
    let client = WebhookClient::new(&cli.network).context("Failed to create HTTP client")?;
    let plugin = Plugin::new(settings, cli.pipeline, TeraRenderer::new(), client);

    if cli.dry_run {
        let message = plugin.compose(&cancel).await?;
        println!("{}", serde_json::to_string_pretty(&message)?);
        info!("dry-run, message not sent");
        return Ok(());
    }

    plugin.validate().context("validation failed")?;
    plugin.execute(&cancel).await.context("execution failed")?;

    Ok(())
}
