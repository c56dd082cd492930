//! 求值错误
//!
//! 与词法 / 语法诊断不同，求值错误是致命的：一旦出现，本次运行不产生结果。

use thiserror::Error;

use crate::util::diagnostic::codes::{
    ARITHMETIC_OVERFLOW, DIVISION_BY_ZERO, ELSEIF_UNSUPPORTED, ILLEGAL_ARGUMENT, ILLEGAL_STATE,
    INTEGER_OUT_OF_RANGE, LITERAL_IDENTIFIER, MALFORMED_EXPRESSION, OPERATOR_ARITY,
    TYPE_MISMATCH,
};
use crate::util::diagnostic::{Diagnostic, DiagnosticBuilder, ErrorCodeDefinition};

/// 求值错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// 操作数类型不符合运算符要求
    #[error("Type mismatch: '{operator}' expects {expected}, found {found}")]
    TypeMismatch {
        operator: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// 既不是整数也不是布尔值的操作数
    #[error("Literal identifier '{0}' is not supported")]
    LiteralIdentifier(String),

    #[error("Integer literal '{0}' is out of range")]
    IntegerOutOfRange(String),

    /// 表达式中出现了无法处理的 token
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// 运算符可用的操作数不足两个
    #[error("Operator '{operator}' expects 2 operands, found {found}")]
    MissingOperand { operator: &'static str, found: usize },

    /// 区域归约后剩余的表达式数量不是 1
    #[error("Malformed {region}: expected one expression, found {found}")]
    MalformedExpression { region: &'static str, found: usize },

    #[error("ELSEIF branches are not supported")]
    ElseIfUnsupported,

    /// 保留字出现在状态机不接受的位置
    #[error("Illegal interpreter state: {0}")]
    IllegalState(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in '{0}'")]
    Overflow(&'static str),
}

impl EvalError {
    /// 对应的错误码定义
    pub fn definition(&self) -> ErrorCodeDefinition {
        match self {
            EvalError::TypeMismatch { .. } => TYPE_MISMATCH,
            EvalError::LiteralIdentifier(_) => LITERAL_IDENTIFIER,
            EvalError::IntegerOutOfRange(_) => INTEGER_OUT_OF_RANGE,
            EvalError::IllegalArgument(_) => ILLEGAL_ARGUMENT,
            EvalError::MissingOperand { .. } => OPERATOR_ARITY,
            EvalError::MalformedExpression { .. } => MALFORMED_EXPRESSION,
            EvalError::ElseIfUnsupported => ELSEIF_UNSUPPORTED,
            EvalError::IllegalState(_) => ILLEGAL_STATE,
            EvalError::DivisionByZero => DIVISION_BY_ZERO,
            EvalError::Overflow(_) => ARITHMETIC_OVERFLOW,
        }
    }

    pub fn code(&self) -> &'static str {
        self.definition().code
    }

    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder: DiagnosticBuilder = self.definition().builder();
        let builder = match self {
            EvalError::TypeMismatch {
                operator,
                expected,
                found,
            } => builder
                .param("operator", *operator)
                .param("expected", *expected)
                .param("found", *found),
            EvalError::LiteralIdentifier(name) => builder.param("name", name.as_str()),
            EvalError::IntegerOutOfRange(literal) => builder.param("literal", literal.as_str()),
            EvalError::IllegalArgument(details) | EvalError::IllegalState(details) => {
                builder.param("details", details.as_str())
            }
            EvalError::MissingOperand { operator, found } => builder
                .param("operator", *operator)
                .param("found", found.to_string()),
            EvalError::MalformedExpression { region, found } => builder
                .param("region", *region)
                .param("found", found.to_string()),
            EvalError::Overflow(operator) => builder.param("operator", *operator),
            EvalError::ElseIfUnsupported | EvalError::DivisionByZero => builder,
        };
        builder.build()
    }
}
