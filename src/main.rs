//! Pipeline Slack CLI
//!
//! 作为 Drone 插件运行，配置来自 `PLUGIN_*` 与 `DRONE_*` 环境变量

use clap::Parser;
use pipeline_slack::cli::{run, Cli};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    // 初始化 tracing 日志系统
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug pipeline-slack
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pipeline_slack=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    // Ctrl-C 取消进行中的请求
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling");
            signal_token.cancel();
        }
    });

    if let Err(e) = run(cli, cancel).await {
        let chain = format!("{:#}", e);
        error!(error = %chain, "notification failed");
        std::process::exit(1);
    }
}
