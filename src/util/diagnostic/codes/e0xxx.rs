//! 错误码定义
//!
//! E0xxx: 词法分析阶段的错误码

use super::{ErrorCategory, ErrorCodeDefinition};

pub const EXPECTED_IF: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0001",
    category: ErrorCategory::Lexer,
    message_template: "Expected 'IF', but got {found}",
};

pub const ILLEGAL_SYMBOL: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0002",
    category: ErrorCategory::Lexer,
    message_template: "Illegal symbol {symbol}",
};

pub const EXPECTED_EQUALS: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0003",
    category: ErrorCategory::Lexer,
    message_template: "Expected '==', but got {found}",
};

pub const INVALID_IDENTIFIER: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0004",
    category: ErrorCategory::Lexer,
    message_template: "Invalid identifier name: variable name can't start from number",
};

pub const EXPECTED_END_IF: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0005",
    category: ErrorCategory::Lexer,
    message_template: "Expected 'END IF', but got {found}",
};

pub const UNTERMINATED_STATEMENT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0006",
    category: ErrorCategory::Lexer,
    message_template: "Missing 'END IF'",
};

pub const TRAILING_INPUT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0007",
    category: ErrorCategory::Lexer,
    message_template: "Unexpected input after 'END IF'",
};

/// E0xxx 错误码列表
pub static E0XXX: &[ErrorCodeDefinition] = &[
    EXPECTED_IF,
    ILLEGAL_SYMBOL,
    EXPECTED_EQUALS,
    INVALID_IDENTIFIER,
    EXPECTED_END_IF,
    UNTERMINATED_STATEMENT,
    TRAILING_INPUT,
];
