//! 错误码定义
//!
//! E2xxx: 求值阶段的错误码（致命错误，由 `EvalError::code` 引用）

use super::{ErrorCategory, ErrorCodeDefinition};

pub const TYPE_MISMATCH: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2001",
    category: ErrorCategory::Runtime,
    message_template: "Type mismatch: '{operator}' expects {expected}, found {found}",
};

pub const LITERAL_IDENTIFIER: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2002",
    category: ErrorCategory::Runtime,
    message_template: "Literal identifier '{name}' is not supported",
};

pub const INTEGER_OUT_OF_RANGE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2003",
    category: ErrorCategory::Runtime,
    message_template: "Integer literal '{literal}' is out of range",
};

pub const ILLEGAL_ARGUMENT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2004",
    category: ErrorCategory::Runtime,
    message_template: "Illegal argument: {details}",
};

pub const OPERATOR_ARITY: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2005",
    category: ErrorCategory::Runtime,
    message_template: "Operator '{operator}' expects 2 operands, found {found}",
};

pub const MALFORMED_EXPRESSION: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2006",
    category: ErrorCategory::Runtime,
    message_template: "Malformed {region}: expected one expression, found {found}",
};

pub const ELSEIF_UNSUPPORTED: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2007",
    category: ErrorCategory::Runtime,
    message_template: "ELSEIF branches are not supported",
};

pub const ILLEGAL_STATE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2008",
    category: ErrorCategory::Runtime,
    message_template: "Illegal interpreter state: {details}",
};

pub const DIVISION_BY_ZERO: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2009",
    category: ErrorCategory::Runtime,
    message_template: "Division by zero",
};

pub const ARITHMETIC_OVERFLOW: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2010",
    category: ErrorCategory::Runtime,
    message_template: "Integer overflow in '{operator}'",
};

/// E2xxx 错误码列表
pub static E2XXX: &[ErrorCodeDefinition] = &[
    TYPE_MISMATCH,
    LITERAL_IDENTIFIER,
    INTEGER_OUT_OF_RANGE,
    ILLEGAL_ARGUMENT,
    OPERATOR_ARITY,
    MALFORMED_EXPRESSION,
    ELSEIF_UNSUPPORTED,
    ILLEGAL_STATE,
    DIVISION_BY_ZERO,
    ARITHMETIC_OVERFLOW,
];
