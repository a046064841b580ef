//! CI 流水线元数据
//!
//! 从 Drone 注入的 `DRONE_*` 环境变量读取。序列化后作为模板上下文，
//! 模板中以 `build.*`、`repo.*`、`commit.*` 访问。

use clap::Args;
use serde::Serialize;

/// 流水线快照
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pipeline {
    #[command(flatten)]
    pub build: Build,
    #[command(flatten)]
    pub repo: Repo,
    #[command(flatten)]
    pub commit: Commit,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize)]
pub struct Build {
    /// success / failure / error / killed / ...
    #[arg(long = "build-status", env = "DRONE_BUILD_STATUS", default_value = "")]
    pub status: String,

    #[arg(id = "build_link", long = "build-link", env = "DRONE_BUILD_LINK", default_value = "")]
    pub link: String,

    #[arg(long = "build-branch", env = "DRONE_COMMIT_BRANCH", default_value = "")]
    pub branch: String,

    #[arg(long = "build-tag", env = "DRONE_TAG", default_value = "")]
    pub tag: String,

    #[arg(long = "build-number", env = "DRONE_BUILD_NUMBER", default_value_t = 0)]
    pub number: u64,

    /// push / pull_request / tag / ...
    #[arg(long = "build-event", env = "DRONE_BUILD_EVENT", default_value = "")]
    pub event: String,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize)]
pub struct Repo {
    #[arg(long = "repo-owner", env = "DRONE_REPO_OWNER", default_value = "")]
    pub owner: String,

    #[arg(long = "repo-name", env = "DRONE_REPO_NAME", default_value = "")]
    pub name: String,

    #[arg(id = "repo_link", long = "repo-link", env = "DRONE_REPO_LINK", default_value = "")]
    pub link: String,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize)]
pub struct Commit {
    /// 完整 commit hash，可能为空（如 tag 构建）
    #[arg(long = "commit-sha", env = "DRONE_COMMIT_SHA", default_value = "")]
    pub sha: String,

    /// 作者显示名
    #[arg(long = "commit-author", env = "DRONE_COMMIT_AUTHOR_NAME", default_value = "")]
    pub author: String,

    #[arg(long = "commit-author-email", env = "DRONE_COMMIT_AUTHOR_EMAIL", default_value = "")]
    pub author_email: String,

    #[arg(long = "commit-author-avatar", env = "DRONE_COMMIT_AUTHOR_AVATAR", default_value = "")]
    pub author_avatar: String,

    #[arg(long = "commit-message", env = "DRONE_COMMIT_MESSAGE", default_value = "")]
    pub message: String,
}
