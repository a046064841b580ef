//! Attachment 颜色选择
//!
//! Slack 支持 `good`、`warning`、`danger` 三种命名颜色，也接受任意十六进制颜色值。

use serde::{Serialize, Serializer};

/// Attachment 侧边栏颜色
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Good,
    Warning,
    Danger,
    /// 用户指定的颜色，原样透传
    Custom(String),
}

impl Color {
    /// 根据构建状态选择颜色（区分大小写）
    pub fn for_status(status: &str) -> Self {
        match status {
            "success" => Color::Good,
            "failure" | "error" | "killed" => Color::Danger,
            _ => Color::Warning,
        }
    }

    /// 显式指定的颜色非空时优先
    pub fn resolve(override_color: &str, status: &str) -> Self {
        if override_color.is_empty() {
            Self::for_status(status)
        } else {
            Color::Custom(override_color.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Color::Good => "good",
            Color::Warning => "warning",
            Color::Danger => "danger",
            Color::Custom(value) => value.as_str(),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
