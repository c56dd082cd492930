//! Parser module
//!
//! Validates the lexer's token stream against the statement grammar and
//! repairs it. The result always derives from the grammar; every repair is
//! recorded as a diagnostic.

pub mod grammar;
pub mod parser_state;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::frontend::lexer::tokens::Token;
use crate::util::diagnostic::{self, Diagnostic};

pub use parser_state::ParserState;

/// Corrected tokens plus every diagnostic gathered so far
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyntaxAnalysis {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxAnalysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Neutralize `tokens`; `lexical` diagnostics are merged ahead of the
/// syntactic ones
pub fn parse(
    tokens: &[Token],
    lexical: Vec<Diagnostic>,
) -> SyntaxAnalysis {
    tracing::debug!("parsing {} tokens", tokens.len());

    let mut state = ParserState::new(tokens);
    grammar::parse_statement(&mut state);
    let (tokens, syntactic) = state.finish();

    tracing::debug!(
        "parsing complete: {} tokens, {} syntax diagnostics",
        tokens.len(),
        syntactic.len()
    );

    SyntaxAnalysis {
        tokens,
        diagnostics: diagnostic::merge(lexical, syntactic),
    }
}
