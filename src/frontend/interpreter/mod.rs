//! Interpreter module
//!
//! Turns a corrected token stream into an expression tree and evaluates it.
//! Unlike the lexer and parser, failures here are fatal for the run.

pub mod error;
pub mod expr;
pub mod shunting_yard;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::EvalError;
pub use expr::{BinaryOp, Expr, Value};
pub use state::{InterpreterState, Stage};

use crate::frontend::lexer::tokens::{Reserved, Token};

/// Expression-tree interpreter
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Build the tree for a whole statement
    pub fn interpret(
        &self,
        tokens: &[Token],
    ) -> Result<Expr, EvalError> {
        let has_else = tokens.iter().any(|t| t.is_reserved(Reserved::Else));
        let mut state = InterpreterState::new(has_else);
        for token in tokens {
            tracing::trace!("interpreter consumes '{}'", token);
            state = state.consume(token)?;
        }
        match state {
            InterpreterState::Done(expr) => Ok(expr),
            _ => Err(EvalError::IllegalState(
                "statement is not closed by END IF".to_string(),
            )),
        }
    }

    /// Build and evaluate
    pub fn evaluate(
        &self,
        tokens: &[Token],
    ) -> Result<Value, EvalError> {
        let expr = self.interpret(tokens)?;
        let value = expr.evaluate()?;
        tracing::debug!("evaluated to {}", value);
        Ok(value)
    }

    /// Reorder every region into postfix, keeping reserved words in place
    pub fn postfix(
        &self,
        tokens: &[Token],
    ) -> Result<Vec<Token>, EvalError> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut region = Vec::new();
        for token in tokens {
            if token.as_reserved().is_some() {
                output.extend(shunting_yard::to_postfix(&region)?);
                region.clear();
                output.push(token.clone());
            } else {
                region.push(token.clone());
            }
        }
        output.extend(shunting_yard::to_postfix(&region)?);
        Ok(output)
    }
}
