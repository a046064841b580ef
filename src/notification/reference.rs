//! 短提交引用

use crate::pipeline::{Build, Commit};

/// 短 SHA 长度
pub const SHORT_SHA_LEN: usize = 8;

/// 提取用于展示的短引用
///
/// commit SHA 非空时取前 8 个字符（不足 8 个则取全部），否则使用构建 tag。
pub fn detect_ref(build: &Build, commit: &Commit) -> String {
    if !commit.sha.is_empty() {
        return commit.sha.chars().take(SHORT_SHA_LEN).collect();
    }

    build.tag.clone()
}
