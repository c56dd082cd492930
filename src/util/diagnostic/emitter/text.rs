//! 文本诊断渲染器

use owo_colors::OwoColorize;

use crate::util::diagnostic::Diagnostic;

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 是否启用颜色输出
    pub use_colors: bool,
    /// 是否显示错误码
    pub show_codes: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: false,
            show_codes: false,
        }
    }
}

/// 文本诊断渲染器，每条诊断一行
#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    /// 创建新的文本渲染器（无颜色、无错误码）
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置创建渲染器
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// 渲染单个诊断
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        let line = if self.config.show_codes {
            format!("[{}] {}", diagnostic.code, diagnostic)
        } else {
            diagnostic.to_string()
        };

        if !self.config.use_colors {
            return line;
        }
        if diagnostic.severity.is_error() {
            line.red().to_string()
        } else {
            line.yellow().to_string()
        }
    }

    /// 渲染多个诊断，一行一个
    pub fn render_all<'a>(
        &self,
        diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    ) -> String {
        diagnostics
            .into_iter()
            .map(|d| self.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 渲染致命错误说明
    pub fn render_failure(
        &self,
        message: &str,
    ) -> String {
        if self.config.use_colors {
            message.red().bold().to_string()
        } else {
            message.to_string()
        }
    }
}
