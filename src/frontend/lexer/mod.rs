//! Lexer module
//!
//! Finite-state lexer for single `IF ... END IF` statements. Malformed input
//! never aborts the scan: the lexer records a diagnostic, inserts what was
//! expected and keeps going.

pub mod state;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::util::diagnostic::Diagnostic;

// Re-export types
pub use state::{LexerAction, LexerContractError, LexerState, Scan};
pub use tokenizer::Lexer;
pub use tokens::{Operator, Reserved, Token, TokenKind};

/// Output of the lexer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexicalAnalysis {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexicalAnalysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Tokenize a source text
pub fn tokenize(source: &str) -> LexicalAnalysis {
    tracing::debug!("lexing {} characters", source.chars().count());
    let analysis = Lexer::new(source).analyze();
    tracing::debug!(
        "lexing complete: {} tokens, {} diagnostics",
        analysis.tokens.len(),
        analysis.diagnostics.len()
    );
    analysis
}
