//! 目标地址解析

/// 解析消息目标：接收者优先（`@user`），其次频道（`#channel`）。
/// 均未设置时返回 `None`，由 webhook 自身的默认频道接收。
pub fn resolve_address(recipient: &str, channel: &str) -> Option<String> {
    if !recipient.is_empty() {
        Some(prepend("@", recipient))
    } else if !channel.is_empty() {
        Some(prepend("#", channel))
    } else {
        None
    }
}

fn prepend(prefix: &str, s: &str) -> String {
    if s.starts_with(prefix) {
        s.to_string()
    } else {
        format!("{}{}", prefix, s)
    }
}
