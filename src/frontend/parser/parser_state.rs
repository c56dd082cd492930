//! Parser state
//!
//! A cursor over the lexer's tokens that builds the corrected output stream.
//! Nothing is ever rejected: tokens are either accepted, synthesized or
//! dropped, and the latter two always leave a diagnostic behind.

use crate::frontend::lexer::tokens::{Operator, Reserved, Token};
use crate::util::diagnostic::codes::UNEXPECTED_TOKEN;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use crate::util::span::Position;

/// Parser state for neutralizing parsing
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
    output: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            output: Vec::with_capacity(tokens.len() + 4),
            diagnostics: Vec::new(),
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Position a synthesized token takes: that of the token it precedes
    pub fn position(&self) -> Option<Position> {
        self.current().and_then(|t| t.position)
    }

    pub fn at_reserved(
        &self,
        reserved: Reserved,
    ) -> bool {
        self.current().is_some_and(|t| t.is_reserved(reserved))
    }

    pub fn at_operand(&self) -> bool {
        self.current().is_some_and(Token::is_operand)
    }

    /// Current operator, if it satisfies `filter`
    pub fn at_operator(
        &self,
        filter: fn(Operator) -> bool,
    ) -> Option<Operator> {
        self.current()
            .and_then(Token::as_operator)
            .filter(|op| filter(*op))
    }

    /// Copy the current token to the output
    pub fn accept(&mut self) {
        if let Some(token) = self.current() {
            self.output.push(token.clone());
            self.pos += 1;
        }
    }

    /// Accept the current token if it is `reserved`
    pub fn skip(
        &mut self,
        reserved: Reserved,
    ) -> bool {
        if self.at_reserved(reserved) {
            self.accept();
            true
        } else {
            false
        }
    }

    /// Insert a token that is not in the input, without a diagnostic
    pub fn insert(
        &mut self,
        token: Token,
    ) {
        let token = token.at_opt(self.position());
        tracing::trace!("parser synthesizes '{}'", token);
        self.output.push(token);
    }

    pub fn report(
        &mut self,
        definition: ErrorCodeDefinition,
    ) {
        let diagnostic = definition.builder().at_opt(self.position()).build();
        tracing::debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Insert an expected token and record that it was missing
    pub fn synthesize(
        &mut self,
        token: Token,
        definition: ErrorCodeDefinition,
    ) {
        self.report(definition);
        self.insert(token);
    }

    /// Accept `reserved`, or synthesize it when absent
    pub fn expect(
        &mut self,
        reserved: Reserved,
        definition: ErrorCodeDefinition,
    ) {
        if !self.skip(reserved) {
            self.synthesize(Token::reserved(reserved), definition);
        }
    }

    /// Skip the current token, reporting it as unexpected
    pub fn drop_unexpected(&mut self) {
        if let Some(token) = self.current() {
            let diagnostic = UNEXPECTED_TOKEN
                .builder()
                .param("token", token.lexeme())
                .at_opt(token.position)
                .build();
            tracing::debug!("{}", diagnostic);
            self.diagnostics.push(diagnostic);
            self.pos += 1;
        }
    }

    /// Drop tokens until `stop` holds for the current one
    pub fn skip_unexpected_until(
        &mut self,
        stop: impl Fn(&Token) -> bool,
    ) {
        while let Some(token) = self.current() {
            if stop(token) {
                break;
            }
            self.drop_unexpected();
        }
    }

    /// Discard the remaining input, reporting only its first token
    pub fn drop_rest(&mut self) {
        if !self.at_end() {
            self.drop_unexpected();
            self.pos = self.tokens.len();
        }
    }

    /// Number of tokens emitted so far
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    pub fn output_since(
        &self,
        start: usize,
    ) -> &[Token] {
        &self.output[start..]
    }

    pub fn finish(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.output, self.diagnostics)
    }
}
