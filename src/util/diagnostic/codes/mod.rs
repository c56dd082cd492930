//! 错误码注册表
//!
//! 提供所有诊断错误码的集中定义和管理

pub mod e0xxx;
pub mod e1xxx;
pub mod e2xxx;

pub use e0xxx::*;
pub use e1xxx::*;
pub use e2xxx::*;

pub mod builder;
pub use builder::DiagnosticBuilder;

use once_cell::sync::Lazy;
use serde::Serialize;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Lexer,   // E0xxx: 词法分析
    Parser,  // E1xxx: 语法分析
    Runtime, // E2xxx: 求值
}

impl ErrorCategory {
    /// 渲染诊断时使用的前缀
    pub fn prefix(&self) -> &'static str {
        match self {
            ErrorCategory::Lexer => "Lexical error",
            ErrorCategory::Parser => "Syntax error",
            ErrorCategory::Runtime => "Cannot interpret",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexer => write!(f, "Lexer"),
            ErrorCategory::Parser => write!(f, "Parser"),
            ErrorCategory::Runtime => write!(f, "Runtime"),
        }
    }
}

/// 错误码定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCodeDefinition {
    /// 错误码，如 "E1002"
    pub code: &'static str,
    /// 错误类别
    pub category: ErrorCategory,
    /// 消息模板，支持 {param} 占位符
    pub message_template: &'static str,
}

/// 完整的错误码注册表
static ERROR_CODES: Lazy<Vec<ErrorCodeDefinition>> = Lazy::new(|| {
    let mut codes: Vec<ErrorCodeDefinition> = Vec::new();

    // E0xxx: 词法分析
    codes.extend_from_slice(e0xxx::E0XXX);
    // E1xxx: 语法分析
    codes.extend_from_slice(e1xxx::E1XXX);
    // E2xxx: 求值
    codes.extend_from_slice(e2xxx::E2XXX);

    codes
});

impl ErrorCodeDefinition {
    /// 根据代码查找错误码定义
    pub fn find(code: &str) -> Option<&'static Self> {
        ERROR_CODES.iter().find(|c| c.code == code)
    }

    /// 获取所有错误码
    pub fn all() -> &'static [Self] {
        &ERROR_CODES
    }

    /// 按类别获取错误码
    pub fn by_category(category: ErrorCategory) -> impl Iterator<Item = &'static Self> {
        ERROR_CODES.iter().filter(move |c| c.category == category)
    }

    /// 创建 DiagnosticBuilder
    pub fn builder(&self) -> DiagnosticBuilder {
        DiagnosticBuilder::new(*self)
    }
}
