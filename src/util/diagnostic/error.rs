//! 诊断数据结构
//!
//! `Diagnostic` 的 `message` 在构建时已渲染完成，只能通过
//! [`DiagnosticBuilder`](super::DiagnosticBuilder) 创建，保证所有错误码都在注册表中。

use serde::Serialize;

use super::codes::ErrorCategory;
use crate::util::span::Position;

/// 诊断严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// 检查是否为错误级别
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// 诊断信息（message 已渲染完成）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 严重级别
    pub severity: Severity,
    /// 错误码
    pub code: &'static str,
    /// 错误类别
    pub category: ErrorCategory,
    /// 完整消息
    pub message: String,
    /// 位置信息
    pub position: Option<Position>,
}

impl Diagnostic {
    /// `pub(crate)`: 仅由 `DiagnosticBuilder::build()` 调用
    pub(crate) fn new(
        severity: Severity,
        code: &'static str,
        category: ErrorCategory,
        message: String,
        position: Option<Position>,
    ) -> Self {
        Self {
            severity,
            code,
            category,
            message,
            position,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}: {}", self.category.prefix(), self.message)?;
        if let Some(position) = self.position {
            write!(f, ": {}", position)?;
        }
        Ok(())
    }
}
