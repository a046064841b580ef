//! 模板渲染能力
//!
//! `TemplateRenderer` 将模板文本与流水线数据组合成消息，组装逻辑不依赖具体模板语法。
//! 默认实现基于 Tera，模板中可使用 `{{ build.status }}`、`{{ repo.owner }}` 等变量。

use crate::error::BoxError;
use crate::pipeline::Pipeline;

/// 模板渲染 trait
pub trait TemplateRenderer: Send + Sync {
    /// 渲染模板，结果去除首尾空白
    fn render(&self, template: &str, pipeline: &Pipeline) -> Result<String, BoxError>;
}

/// Tera 模板渲染器
#[derive(Debug, Default, Clone, Copy)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, template: &str, pipeline: &Pipeline) -> Result<String, BoxError> {
        let context = tera::Context::from_serialize(pipeline)?;
        // Slack 的 mrkdwn 使用 <url|label>，不能做 HTML 转义
        let rendered = tera::Tera::one_off(template, &context, false)?;
        Ok(rendered.trim().to_string())
    }
}
