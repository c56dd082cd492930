//! Interpreter tests module
//!
//! - evaluation: 求值结果测试
//! - errors: 致命错误测试
//! - precedence: 优先级性质测试（proptest）

mod errors;

use crate::frontend::interpreter::{EvalError, Interpreter, Value};
use crate::frontend::lexer::tokenize;
use crate::frontend::parser::parse;

/// Lex, neutralize and evaluate
fn run(source: &str) -> Result<Value, EvalError> {
    let lexical = tokenize(source);
    let syntax = parse(&lexical.tokens, lexical.diagnostics);
    Interpreter::new().evaluate(&syntax.tokens)
}
