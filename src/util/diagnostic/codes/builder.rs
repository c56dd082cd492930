//! 通用诊断构建器
//!
//! 支持模板参数化的错误消息构建器

use super::ErrorCodeDefinition;
use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::span::Position;

/// 诊断构建器（支持模板参数）
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    definition: ErrorCodeDefinition,
    params: Vec<(&'static str, String)>,
    position: Option<Position>,
    severity: Severity,
}

impl DiagnosticBuilder {
    /// 创建新的诊断构建器
    pub fn new(definition: ErrorCodeDefinition) -> Self {
        Self {
            definition,
            params: Vec::new(),
            position: None,
            severity: Severity::Error,
        }
    }

    /// 添加模板参数
    pub fn param(
        mut self,
        key: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// 设置位置
    #[inline]
    pub fn at(
        mut self,
        position: Position,
    ) -> Self {
        self.position = Some(position);
        self
    }

    /// 设置可选位置（输入末尾没有位置）
    #[inline]
    pub fn at_opt(
        mut self,
        position: Option<Position>,
    ) -> Self {
        self.position = position;
        self
    }

    /// 降级为警告
    #[inline]
    pub fn warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    /// 渲染模板
    pub fn render_message(&self) -> String {
        let mut message = self.definition.message_template.to_string();
        for (key, value) in &self.params {
            message = message.replace(&format!("{{{}}}", key), value);
        }
        message
    }

    /// 构建 Diagnostic
    pub fn build(self) -> Diagnostic {
        let message = self.render_message();
        Diagnostic::new(
            self.severity,
            self.definition.code,
            self.definition.category,
            message,
            self.position,
        )
    }
}
