//! Analysis report
//!
//! Renders one run: the corrected code, the diagnostics and either the
//! evaluated value or the reason evaluation failed.

use serde::Serialize;
use std::fmt;

use super::format::format_tokens;
use super::interpreter::{EvalError, Interpreter, Value};
use crate::frontend::lexer::tokens::Token;
use crate::util::config::{OutputConfig, OutputFormat};
use crate::util::diagnostic::emitter::json::JsonDiagnostic;
use crate::util::diagnostic::emitter::EmitterConfig;
use crate::util::diagnostic::{Diagnostic, JsonEmitter, TextEmitter};

/// Result of a full Lexer → Parser → Interpreter run
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Corrected token sequence
    pub tokens: Vec<Token>,
    /// Lexical and syntactic diagnostics, lexical first
    pub diagnostics: Vec<Diagnostic>,
    pub result: Result<Value, EvalError>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    code: String,
    tokens: &'a [Token],
    diagnostics: Vec<JsonDiagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonDiagnostic>,
}

impl Analysis {
    /// Whether lexing and parsing needed no repair
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Corrected code as source text
    pub fn formatted(&self) -> String {
        format_tokens(&self.tokens)
    }

    /// Per-region postfix view of the corrected tokens
    pub fn postfix(&self) -> Result<Vec<Token>, EvalError> {
        Interpreter::new().postfix(&self.tokens)
    }

    /// Plain-text report
    pub fn render(&self) -> String {
        self.render_with(&TextEmitter::new())
    }

    pub fn render_with(
        &self,
        emitter: &TextEmitter,
    ) -> String {
        let mut output = if self.is_clean() {
            format!("{}\n\nNo errors\n", self.formatted())
        } else {
            format!(
                "Corrected code:\n{}\n\nErrors:\n{}\n",
                self.formatted(),
                emitter.render_all(&self.diagnostics)
            )
        };

        match &self.result {
            Ok(value) => output.push_str(&format!("Interpretation result: {}", value)),
            Err(err) => {
                output.push_str(&emitter.render_failure(&err.to_diagnostic().to_string()));
            }
        }
        output
    }

    /// Report in the configured format and style
    pub fn render_for(
        &self,
        output: &OutputConfig,
    ) -> serde_json::Result<String> {
        if output.format == OutputFormat::Json {
            return self.to_json();
        }

        let emitter = TextEmitter::with_config(EmitterConfig {
            use_colors: output.colors,
            show_codes: output.show_codes,
        });
        let mut report = self.render_with(&emitter);
        if output.show_postfix {
            let postfix = match self.postfix() {
                Ok(tokens) => tokens
                    .iter()
                    .map(Token::lexeme)
                    .collect::<Vec<_>>()
                    .join(" "),
                Err(err) => err.to_diagnostic().to_string(),
            };
            report.push_str(&format!("\nPostfix: {}", postfix));
        }
        Ok(report)
    }

    /// JSON report
    pub fn to_json(&self) -> serde_json::Result<String> {
        let emitter = JsonEmitter::new();
        let report = JsonReport {
            code: self.formatted(),
            tokens: &self.tokens,
            diagnostics: emitter.convert(&self.diagnostics),
            result: self.result.as_ref().ok().copied(),
            error: self
                .result
                .as_ref()
                .err()
                .map(|err| JsonDiagnostic::from(&err.to_diagnostic())),
        };
        serde_json::to_string_pretty(&report)
    }
}

impl fmt::Display for Analysis {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.render())
    }
}
