//! 错误码定义
//!
//! E1xxx: 语法分析（中和）阶段的错误码

use super::{ErrorCategory, ErrorCodeDefinition};

pub const MISSING_IF: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1001",
    category: ErrorCategory::Parser,
    message_template: "Missing IF",
};

pub const MISSING_THEN: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1002",
    category: ErrorCategory::Parser,
    message_template: "Missing THEN",
};

pub const MISSING_ELSE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1003",
    category: ErrorCategory::Parser,
    message_template: "Missing ELSE",
};

pub const MISSING_END_IF: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1004",
    category: ErrorCategory::Parser,
    message_template: "Missing END IF",
};

pub const MISSING_CONDITION: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1005",
    category: ErrorCategory::Parser,
    message_template: "Missing condition",
};

pub const MISSING_OPERAND: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1006",
    category: ErrorCategory::Parser,
    message_template: "Missing operand",
};

pub const UNEXPECTED_TOKEN: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1007",
    category: ErrorCategory::Parser,
    message_template: "Unexpected token '{token}'",
};

/// E1xxx 错误码列表
pub static E1XXX: &[ErrorCodeDefinition] = &[
    MISSING_IF,
    MISSING_THEN,
    MISSING_ELSE,
    MISSING_END_IF,
    MISSING_CONDITION,
    MISSING_OPERAND,
    UNEXPECTED_TOKEN,
];
