//! Tokenizer driver
//!
//! Walks the source one character at a time, tracks positions and feeds
//! [`LexerAction`]s into the state machine until it terminates.

use std::str::Chars;

use super::state::{LexerAction, LexerState, Scan};
use super::LexicalAnalysis;
use crate::util::diagnostic::codes::TRAILING_INPUT;
use crate::util::span::Position;

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Chars<'a>,
    position: Position,
    state: LexerState,
    scan: Scan,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            position: Position::start(),
            state: LexerState::Initial,
            scan: Scan::default(),
        }
    }

    /// Position of the next character to be read
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> &LexerState {
        &self.state
    }

    /// Run one transition. Returns `true` when the action must be fed again.
    fn step(
        &mut self,
        action: LexerAction,
    ) -> bool {
        let state = std::mem::replace(&mut self.state, LexerState::Terminal);
        let scan = std::mem::take(&mut self.scan);
        match state.consume(action, scan) {
            Ok(transition) => {
                tracing::trace!("lexer -> {:?}", transition.state);
                self.state = transition.state;
                self.scan = transition.scan;
                transition.reconsume
            }
            Err(err) => {
                tracing::error!("{}", err);
                self.scan = err.into_scan();
                false
            }
        }
    }

    /// Consume the whole source
    pub fn analyze(mut self) -> LexicalAnalysis {
        self.step(LexerAction::Initiate);

        while let Some(ch) = self.chars.next() {
            let position = self.position;
            self.position = position.advance(ch);

            if self.state.is_terminal() {
                if ch.is_whitespace() {
                    continue;
                }
                let diagnostic = TRAILING_INPUT.builder().at(position).build();
                tracing::debug!("{}", diagnostic);
                self.scan.diagnostics.push(diagnostic);
                break;
            }

            let action = LexerAction::EmitChar { ch, position };
            while self.step(action) {}
        }

        if !self.state.is_terminal() {
            self.step(LexerAction::Terminate);
        }

        LexicalAnalysis {
            tokens: self.scan.tokens,
            diagnostics: self.scan.diagnostics,
        }
    }
}
