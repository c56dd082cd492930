//! Frontend analysis pipeline
//!
//! This module contains the lexer, the parser and the interpreter.
//! Lexing and parsing always succeed and report problems as diagnostics;
//! only evaluation can fail.

use tracing::debug;

pub mod format;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod report;

pub use report::Analysis;

use interpreter::Interpreter;
use parser::SyntaxAnalysis;

/// Analyzer context
///
/// Holds no state between runs; every call builds fresh state machines.
#[derive(Debug, Default)]
pub struct Analyzer {
    interpreter: Interpreter,
}

impl Analyzer {
    /// Create a new analyzer
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lex and neutralize without evaluating
    pub fn check(
        &self,
        source: &str,
    ) -> SyntaxAnalysis {
        debug!("Checking source code ({} bytes)", source.len());
        // Lexical analysis
        let lexical = lexer::tokenize(source);
        debug!(
            "Tokenized into {} tokens with {} diagnostics",
            lexical.tokens.len(),
            lexical.diagnostics.len()
        );

        // Neutralization
        parser::parse(&lexical.tokens, lexical.diagnostics)
    }

    /// Run the full pipeline
    pub fn analyze(
        &self,
        source: &str,
    ) -> Analysis {
        let syntax = self.check(source);
        debug!(
            "Parsing finished, {} diagnostics in total",
            syntax.diagnostics.len()
        );

        // Evaluation
        let result = self.interpreter.evaluate(&syntax.tokens);
        match &result {
            Ok(value) => debug!("Interpretation result: {}", value),
            Err(err) => debug!("Cannot interpret: {}", err),
        }

        Analysis {
            tokens: syntax.tokens,
            diagnostics: syntax.diagnostics,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::interpreter::{EvalError, Value};

    #[test]
    fn test_clean_report() {
        let analysis = Analyzer::new().analyze("IF 1 > 0 THEN 5 + 3 END IF");
        assert!(analysis.is_clean());
        assert_eq!(analysis.result, Ok(Value::Number(8)));
        assert_eq!(
            analysis.render(),
            "IF 1 > 0 THEN\n\t5 + 3\nEND IF\n\nNo errors\nInterpretation result: 8"
        );
    }

    #[test]
    fn test_corrected_report() {
        let analysis = Analyzer::new().analyze("IF 1 > 0 5 END IF");
        assert_eq!(
            analysis.to_string(),
            "Corrected code:\nIF 1 > 0 THEN\n\t5\nEND IF\n\nErrors:\n\
             Syntax error: Missing THEN: (1,10)\nInterpretation result: 5"
        );
    }

    #[test]
    fn test_failure_report() {
        let analysis = Analyzer::new().analyze("IF x == 1 THEN 1 END IF");
        assert!(analysis.is_clean());
        assert_eq!(
            analysis.result,
            Err(EvalError::LiteralIdentifier("x".to_string()))
        );
        assert!(analysis
            .render()
            .ends_with("\nCannot interpret: Literal identifier 'x' is not supported"));
    }

    #[test]
    fn test_check_does_not_evaluate() {
        let syntax = Analyzer::new().check("IF 1 / 0 > 0 THEN 1 END IF");
        assert!(syntax.diagnostics.is_empty());
        assert_eq!(syntax.tokens.len(), 9);
    }

    #[test]
    fn test_json_report() {
        let analysis = Analyzer::new().analyze("IF true THEN 1 / 0 END IF");
        let json: serde_json::Value = serde_json::from_str(&analysis.to_json().unwrap()).unwrap();
        assert_eq!(json["code"], "IF true THEN\n\t1 / 0\nEND IF");
        assert_eq!(json["error"]["code"], "E2009");
        assert!(json.get("result").is_none());
        assert_eq!(json["tokens"][0]["kind"], "reserved");
    }
}
