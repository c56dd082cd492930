//! 统一诊断系统
//!
//! 词法与语法阶段从不中断流水线：每个问题都被记录为一条 [`Diagnostic`]，
//! 按出现顺序累积，最后随修正后的 token 序列一起返回。
//!
//! # 模块结构
//!
//! - [`error`] - 诊断数据结构 (Diagnostic, Severity)
//! - [`codes`] - 错误码注册表与构建器
//! - [`emitter`] - 文本 / JSON 渲染
//!
//! # 示例
//!
//! ```
//! use condlang::util::diagnostic::codes::MISSING_THEN;
//! use condlang::util::span::Position;
//!
//! let diagnostic = MISSING_THEN.builder().at(Position::new(1, 10)).build();
//! assert_eq!(diagnostic.to_string(), "Syntax error: Missing THEN: (1,10)");
//! ```

pub mod codes;
pub mod emitter;
pub mod error;

// 重新导出
pub use codes::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};
pub use emitter::{JsonEmitter, TextEmitter};
pub use error::{Diagnostic, Severity};

/// 合并两组诊断，保持顺序并去除完全相同的重复项（保留首次出现）
pub fn merge(
    first: Vec<Diagnostic>,
    second: Vec<Diagnostic>,
) -> Vec<Diagnostic> {
    let mut merged: Vec<Diagnostic> = Vec::with_capacity(first.len() + second.len());
    for diagnostic in first.into_iter().chain(second) {
        if !merged.contains(&diagnostic) {
            merged.push(diagnostic);
        }
    }
    merged
}
