//! 消息文本组装
//!
//! 正文与回退文本相互独立：各自有模板时渲染模板，否则使用默认格式。
//! 模板文件（如设置）在组装前读取一次，覆盖内联模板。

use std::borrow::Cow;
use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::info;

use super::reference::detect_ref;
use super::template::TemplateRenderer;
use crate::error::{PluginError, Result};
use crate::pipeline::Pipeline;
use crate::settings::Settings;

/// 组装结果
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedText {
    /// 正文（mrkdwn）
    pub text: String,
    /// 纯文本回退
    pub fallback: String,
}

/// 消息组装器
pub struct MessageComposer<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> MessageComposer<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// 生成正文与回退文本
    pub async fn compose(
        &self,
        settings: &Settings,
        pipeline: &Pipeline,
        cancel: &CancellationToken,
    ) -> Result<ComposedText> {
        let template = load_template(settings, cancel).await?;

        let text = if template.is_empty() {
            default_message(pipeline)
        } else {
            info!(template = %template, "parsed template");
            let text = self.render("text", &template, pipeline)?;
            info!(text = %text, "completed message");
            text
        };

        // 回退文本不能为空，模板渲染为空时退回默认格式
        let fallback = if settings.fallback.is_empty() {
            String::new()
        } else {
            self.render("fallback", &settings.fallback, pipeline)?
        };
        let fallback = if fallback.is_empty() {
            default_fallback(pipeline)
        } else {
            fallback
        };

        Ok(ComposedText { text, fallback })
    }

    fn render(&self, target: &'static str, template: &str, pipeline: &Pipeline) -> Result<String> {
        self.renderer
            .render(template, pipeline)
            .map_err(|source| PluginError::TemplateRender { target, source })
    }
}

/// 确定生效的正文模板：模板文件优先于内联模板
async fn load_template<'s>(
    settings: &'s Settings,
    cancel: &CancellationToken,
) -> Result<Cow<'s, str>> {
    if settings.template_file.is_empty() {
        return Ok(Cow::Borrowed(settings.template.as_str()));
    }

    let path = PathBuf::from(&settings.template_file);
    let read = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "template file read cancelled",
        )),
        result = tokio::fs::read_to_string(&path) => result,
    };
    let data = read.map_err(|source| PluginError::TemplateFileRead { path, source })?;

    info!(template_raw = %data, "loaded template file");
    Ok(Cow::Owned(data))
}

/// 默认正文：`*success* <link|owner/name#ref> (branch) by author`
pub fn default_message(pipeline: &Pipeline) -> String {
    format!(
        "*{}* <{}|{}/{}#{}> ({}) by {}",
        pipeline.build.status,
        pipeline.build.link,
        pipeline.repo.owner,
        pipeline.repo.name,
        detect_ref(&pipeline.build, &pipeline.commit),
        pipeline.build.branch,
        pipeline.commit.author,
    )
}

/// 默认回退文本，不含链接标记
pub fn default_fallback(pipeline: &Pipeline) -> String {
    format!(
        "{} {}/{}#{} ({}) by {}",
        pipeline.build.status,
        pipeline.repo.owner,
        pipeline.repo.name,
        detect_ref(&pipeline.build, &pipeline.commit),
        pipeline.build.branch,
        pipeline.commit.author,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::template::TeraRenderer;
    use crate::pipeline::{Build, Commit, Repo};
    use std::io::Write;

    fn pipeline() -> Pipeline {
        Pipeline {
            build: Build {
                status: "success".to_string(),
                link: "http://x".to_string(),
                branch: "main".to_string(),
                ..Default::default()
            },
            repo: Repo {
                owner: "o".to_string(),
                name: "r".to_string(),
                ..Default::default()
            },
            commit: Commit {
                sha: "abcdef1234".to_string(),
                author: "Al".to_string(),
                ..Default::default()
            },
        }
    }

    /// 测试用渲染器：总是失败
    struct FailingRenderer;

    impl TemplateRenderer for FailingRenderer {
        fn render(
            &self,
            _template: &str,
            _pipeline: &Pipeline,
        ) -> std::result::Result<String, crate::error::BoxError> {
            Err("boom".into())
        }
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(
            default_message(&pipeline()),
            "*success* <http://x|o/r#abcdef12> (main) by Al"
        );
        assert_eq!(default_fallback(&pipeline()), "success o/r#abcdef12 (main) by Al");
    }

    #[test]
    fn test_default_messages_use_tag_without_sha() {
        let mut p = pipeline();
        p.commit.sha.clear();
        p.build.tag = "v1.2.3".to_string();
        assert_eq!(default_fallback(&p), "success o/r#v1.2.3 (main) by Al");
    }

    #[tokio::test]
    async fn test_compose_defaults() {
        let renderer = TeraRenderer::new();
        let composed = MessageComposer::new(&renderer)
            .compose(&Settings::default(), &pipeline(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(composed.text, "*success* <http://x|o/r#abcdef12> (main) by Al");
        assert_eq!(composed.fallback, "success o/r#abcdef12 (main) by Al");
    }

    #[tokio::test]
    async fn test_compose_templates_are_independent() {
        let renderer = TeraRenderer::new();
        let composer = MessageComposer::new(&renderer);

        // 只设置正文模板，回退仍为默认
        let settings = Settings {
            template: "build {{ build.status }}".to_string(),
            ..Default::default()
        };
        let composed = composer
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(composed.text, "build success");
        assert_eq!(composed.fallback, "success o/r#abcdef12 (main) by Al");

        // 只设置回退模板，正文仍为默认
        let settings = Settings {
            fallback: "{{ repo.name }} done".to_string(),
            ..Default::default()
        };
        let composed = composer
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(composed.text, "*success* <http://x|o/r#abcdef12> (main) by Al");
        assert_eq!(composed.fallback, "r done");
    }

    #[tokio::test]
    async fn test_template_file_overrides_inline_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{{{build.status}}}}").unwrap();

        let settings = Settings {
            template: "inline {{ repo.owner }}".to_string(),
            template_file: file.path().to_string_lossy().into_owned(),
            ..Default::default()
        };

        let renderer = TeraRenderer::new();
        let composed = MessageComposer::new(&renderer)
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(composed.text, "success");
    }

    #[tokio::test]
    async fn test_empty_template_file_uses_default_message() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = Settings {
            template: "inline".to_string(),
            template_file: file.path().to_string_lossy().into_owned(),
            ..Default::default()
        };

        let renderer = TeraRenderer::new();
        let composed = MessageComposer::new(&renderer)
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(composed.text, default_message(&pipeline()));
    }

    #[tokio::test]
    async fn test_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            template_file: dir
                .path()
                .join("missing.tpl")
                .to_string_lossy()
                .into_owned(),
            ..Default::default()
        };

        let renderer = TeraRenderer::new();
        let err = MessageComposer::new(&renderer)
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::TemplateFileRead { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_template_file_read() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = Settings {
            template_file: file.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        let cancel = CancellationToken::new();
        cancel.cancel();

        let renderer = TeraRenderer::new();
        let result = MessageComposer::new(&renderer)
            .compose(&settings, &pipeline(), &cancel)
            .await;
        let err = result.unwrap_err();
        match err {
            PluginError::TemplateFileRead { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::Interrupted)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_render_failure_names_target() {
        let composer = MessageComposer::new(&FailingRenderer);

        let settings = Settings {
            template: "x".to_string(),
            ..Default::default()
        };
        let err = composer
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::TemplateRender { target: "text", .. }));

        let settings = Settings {
            fallback: "x".to_string(),
            ..Default::default()
        };
        let err = composer
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::TemplateRender { target: "fallback", .. }));
    }

    #[tokio::test]
    async fn test_empty_rendered_fallback_uses_default() {
        let renderer = TeraRenderer::new();
        let composer = MessageComposer::new(&renderer);

        // tag 为空，模板渲染结果为空
        let settings = Settings {
            fallback: "{{ build.tag }}".to_string(),
            ..Default::default()
        };
        let composed = composer
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(composed.fallback, "success o/r#abcdef12 (main) by Al");

        let composed = composer
            .compose(&settings, &Pipeline::default(), &CancellationToken::new())
            .await
            .unwrap();
        assert!(!composed.fallback.is_empty());
        assert_eq!(composed.fallback, default_fallback(&Pipeline::default()));
    }

    #[tokio::test]
    async fn test_whitespace_fallback_uses_default() {
        let renderer = TeraRenderer::new();
        let settings = Settings {
            fallback: "   ".to_string(),
            ..Default::default()
        };
        let composed = MessageComposer::new(&renderer)
            .compose(&settings, &pipeline(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(composed.fallback, "success o/r#abcdef12 (main) by Al");
    }
}
