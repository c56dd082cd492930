//! Lexer state machine
//!
//! The lexer is a closed set of states. Each transition consumes the current
//! state together with the [`Scan`] accumulator and hands both back inside a
//! [`Transition`]. Every error path still emits a token, so the parser always
//! receives a structurally complete stream.

use thiserror::Error;

use super::tokens::{Operator, Reserved, Token};
use crate::util::diagnostic::codes::{
    EXPECTED_END_IF, EXPECTED_EQUALS, EXPECTED_IF, ILLEGAL_SYMBOL, INVALID_IDENTIFIER,
    UNTERMINATED_STATEMENT,
};
use crate::util::diagnostic::{Diagnostic, DiagnosticBuilder};
use crate::util::span::Position;

/// Input fed into the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerAction {
    Initiate,
    EmitChar { ch: char, position: Position },
    Terminate,
}

impl LexerAction {
    fn name(&self) -> &'static str {
        match self {
            LexerAction::Initiate => "Initiate",
            LexerAction::EmitChar { .. } => "EmitChar",
            LexerAction::Terminate => "Terminate",
        }
    }
}

/// Tokens and diagnostics accumulated so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Scan {
    fn emit(
        &mut self,
        token: Token,
    ) {
        tracing::trace!("lexer emits '{}'", token);
        self.tokens.push(token);
    }

    fn report(
        &mut self,
        builder: DiagnosticBuilder,
    ) {
        let diagnostic = builder.build();
        tracing::debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Which state requested an identifier read and gets control back afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadContext {
    Condition,
    Statement,
}

impl ReadContext {
    fn state(self) -> LexerState {
        match self {
            ReadContext::Condition => LexerState::ConditionRead,
            ReadContext::Statement => LexerState::StatementRead,
        }
    }

    /// Statements skip unknown characters silently
    fn reports_illegal_symbols(self) -> bool {
        matches!(self, ReadContext::Condition)
    }
}

/// Lexer state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerState {
    Initial,
    /// `start` is set once the `I` of `IF` has been read
    IfRead { start: Option<Position> },
    ConditionRead,
    /// First `=` of `==` has been read at `start`
    EqualsOperatorRead { start: Position },
    IntegerIdentifierRead {
        lexeme: String,
        start: Position,
        context: ReadContext,
    },
    LiteralIdentifierRead {
        lexeme: String,
        start: Position,
        context: ReadContext,
    },
    /// `END` has been read at `start`; `seen_i` once the following `I` arrives
    EndIfRead { start: Position, seen_i: bool },
    StatementRead,
    Terminal,
}

/// Result of one transition
#[derive(Debug)]
pub struct Transition {
    pub state: LexerState,
    pub scan: Scan,
    /// The consumed character must be fed again to the new state
    pub reconsume: bool,
}

impl Transition {
    fn to(
        state: LexerState,
        scan: Scan,
    ) -> Self {
        Self {
            state,
            scan,
            reconsume: false,
        }
    }

    fn reconsume(
        state: LexerState,
        scan: Scan,
    ) -> Self {
        Self {
            state,
            scan,
            reconsume: true,
        }
    }
}

/// Misuse of the state machine; the accumulator is handed back untouched
#[derive(Debug, Error)]
pub enum LexerContractError {
    #[error("lexer was not initiated, cannot accept {action}")]
    NotInitiated { action: &'static str, scan: Scan },
    #[error("lexer is already initiated")]
    AlreadyInitiated { scan: Scan },
    #[error("lexer reached its terminal state, cannot accept {action}")]
    Terminated { action: &'static str, scan: Scan },
}

impl LexerContractError {
    pub fn into_scan(self) -> Scan {
        match self {
            LexerContractError::NotInitiated { scan, .. }
            | LexerContractError::AlreadyInitiated { scan }
            | LexerContractError::Terminated { scan, .. } => scan,
        }
    }
}

impl LexerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LexerState::Terminal)
    }

    /// Feed one action into the machine
    pub fn consume(
        self,
        action: LexerAction,
        scan: Scan,
    ) -> Result<Transition, LexerContractError> {
        match (self, action) {
            (LexerState::Initial, LexerAction::Initiate) => {
                Ok(Transition::to(LexerState::IfRead { start: None }, scan))
            }
            (LexerState::Initial, action) => Err(LexerContractError::NotInitiated {
                action: action.name(),
                scan,
            }),
            (LexerState::Terminal, action) => Err(LexerContractError::Terminated {
                action: action.name(),
                scan,
            }),
            (_, LexerAction::Initiate) => Err(LexerContractError::AlreadyInitiated { scan }),
            (state, LexerAction::Terminate) => Ok(state.terminate(scan)),
            (LexerState::IfRead { start }, LexerAction::EmitChar { ch, position }) => {
                Ok(read_if(start, ch, position, scan))
            }
            (LexerState::ConditionRead, LexerAction::EmitChar { ch, position }) => {
                Ok(read_condition(ch, position, scan))
            }
            (LexerState::EqualsOperatorRead { start }, LexerAction::EmitChar { ch, position }) => {
                Ok(read_equals(start, ch, position, scan))
            }
            (
                LexerState::IntegerIdentifierRead {
                    lexeme,
                    start,
                    context,
                },
                LexerAction::EmitChar { ch, position },
            ) => Ok(read_integer(lexeme, start, context, ch, position, scan)),
            (
                LexerState::LiteralIdentifierRead {
                    lexeme,
                    start,
                    context,
                },
                LexerAction::EmitChar { ch, position },
            ) => Ok(read_literal(lexeme, start, context, ch, position, scan)),
            (LexerState::EndIfRead { start, seen_i }, LexerAction::EmitChar { ch, position }) => {
                Ok(read_end_if(start, seen_i, ch, position, scan))
            }
            (LexerState::StatementRead, LexerAction::EmitChar { ch, position }) => {
                Ok(read_statement(ch, position, scan))
            }
        }
    }
}

const END_OF_INPUT: &str = "end of input";

fn quote(ch: char) -> String {
    format!("'{}'", ch.escape_default())
}

impl LexerState {
    /// End of input: flush whatever is pending and force `END IF`
    fn terminate(
        self,
        mut scan: Scan,
    ) -> Transition {
        match self {
            LexerState::Initial | LexerState::Terminal => Transition::to(LexerState::Terminal, scan),
            LexerState::IfRead { start } => {
                scan.emit(Token::reserved(Reserved::If).at_opt(start));
                scan.report(EXPECTED_IF.builder().param("found", END_OF_INPUT));
                force_end(scan)
            }
            LexerState::ConditionRead | LexerState::StatementRead => force_end(scan),
            LexerState::EqualsOperatorRead { start } => {
                scan.emit(Token::operator(Operator::Equals).at(start));
                scan.report(EXPECTED_EQUALS.builder().param("found", END_OF_INPUT));
                force_end(scan)
            }
            LexerState::IntegerIdentifierRead { lexeme, start, .. } => {
                scan.emit(Token::operand(lexeme).at(start));
                force_end(scan)
            }
            LexerState::LiteralIdentifierRead {
                lexeme,
                start,
                context,
            } => {
                // resolves to a non-identifier state, so this recurses at most once
                let resolved = resolve_identifier(lexeme, start, context, &mut scan);
                resolved.terminate(scan)
            }
            LexerState::EndIfRead { start, .. } => {
                scan.emit(Token::reserved(Reserved::EndIf).at(start));
                scan.report(EXPECTED_END_IF.builder().param("found", END_OF_INPUT));
                Transition::to(LexerState::Terminal, scan)
            }
        }
    }
}

fn force_end(mut scan: Scan) -> Transition {
    scan.emit(Token::reserved(Reserved::EndIf));
    scan.report(UNTERMINATED_STATEMENT.builder());
    Transition::to(LexerState::Terminal, scan)
}

fn start_read(
    ch: char,
    position: Position,
    context: ReadContext,
) -> Option<LexerState> {
    if ch.is_ascii_digit() {
        Some(LexerState::IntegerIdentifierRead {
            lexeme: ch.to_string(),
            start: position,
            context,
        })
    } else if ch.is_alphabetic() {
        Some(LexerState::LiteralIdentifierRead {
            lexeme: ch.to_string(),
            start: position,
            context,
        })
    } else {
        None
    }
}

fn read_if(
    start: Option<Position>,
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    match (start, ch.to_ascii_uppercase()) {
        (None, c) if c.is_whitespace() => Transition::to(LexerState::IfRead { start: None }, scan),
        (None, 'I') => Transition::to(
            LexerState::IfRead {
                start: Some(position),
            },
            scan,
        ),
        (Some(start), 'F') => {
            scan.emit(Token::reserved(Reserved::If).at(start));
            Transition::to(LexerState::ConditionRead, scan)
        }
        (start, _) => {
            scan.report(EXPECTED_IF.builder().param("found", quote(ch)).at(position));
            scan.emit(Token::reserved(Reserved::If).at(start.unwrap_or(position)));
            Transition::reconsume(LexerState::ConditionRead, scan)
        }
    }
}

fn read_condition(
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    if let Some(operator) = Operator::from_symbol(ch) {
        scan.emit(Token::operator(operator).at(position));
        return Transition::to(LexerState::ConditionRead, scan);
    }
    if let Some(read) = start_read(ch, position, ReadContext::Condition) {
        return Transition::to(read, scan);
    }
    match ch {
        c if c.is_whitespace() => Transition::to(LexerState::ConditionRead, scan),
        '=' => Transition::to(LexerState::EqualsOperatorRead { start: position }, scan),
        c => {
            scan.report(ILLEGAL_SYMBOL.builder().param("symbol", quote(c)).at(position));
            Transition::to(LexerState::ConditionRead, scan)
        }
    }
}

/// The character following a lone `=` is dropped, not re-read.
fn read_equals(
    start: Position,
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    scan.emit(Token::operator(Operator::Equals).at(start));
    if ch != '=' {
        scan.report(EXPECTED_EQUALS.builder().param("found", quote(ch)).at(position));
    }
    Transition::to(LexerState::ConditionRead, scan)
}

fn read_integer(
    mut lexeme: String,
    start: Position,
    context: ReadContext,
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    if ch.is_ascii_digit() {
        lexeme.push(ch);
        return Transition::to(
            LexerState::IntegerIdentifierRead {
                lexeme,
                start,
                context,
            },
            scan,
        );
    }
    if let Some(operator) = Operator::from_symbol(ch) {
        scan.emit(Token::operand(lexeme).at(start));
        scan.emit(Token::operator(operator).at(position));
        return Transition::to(LexerState::ConditionRead, scan);
    }
    match ch {
        c if c.is_whitespace() => {
            scan.emit(Token::operand(lexeme).at(start));
            Transition::to(context.state(), scan)
        }
        '=' => {
            scan.emit(Token::operand(lexeme).at(start));
            Transition::to(LexerState::EqualsOperatorRead { start: position }, scan)
        }
        // the digits stay a number and the letters start a word of their own
        c if c.is_alphabetic() => {
            scan.report(INVALID_IDENTIFIER.builder().at(start));
            scan.emit(Token::operand(lexeme).at(start));
            Transition::to(
                LexerState::LiteralIdentifierRead {
                    lexeme: c.to_string(),
                    start: position,
                    context,
                },
                scan,
            )
        }
        c => {
            if context.reports_illegal_symbols() {
                scan.report(ILLEGAL_SYMBOL.builder().param("symbol", quote(c)).at(position));
            }
            scan.emit(Token::operand(lexeme).at(start));
            Transition::to(context.state(), scan)
        }
    }
}

fn read_literal(
    mut lexeme: String,
    start: Position,
    context: ReadContext,
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    if ch.is_alphanumeric() || ch == '_' {
        lexeme.push(ch);
        return Transition::to(
            LexerState::LiteralIdentifierRead {
                lexeme,
                start,
                context,
            },
            scan,
        );
    }

    let resolved = resolve_identifier(lexeme, start, context, &mut scan);
    if ch.is_whitespace() {
        return Transition::to(resolved, scan);
    }
    if matches!(resolved, LexerState::EndIfRead { .. }) {
        return Transition::reconsume(resolved, scan);
    }
    if let Some(operator) = Operator::from_symbol(ch) {
        scan.emit(Token::operator(operator).at(position));
        return Transition::to(resolved, scan);
    }
    if ch == '=' {
        return Transition::to(LexerState::EqualsOperatorRead { start: position }, scan);
    }
    if resolved == LexerState::ConditionRead {
        scan.report(ILLEGAL_SYMBOL.builder().param("symbol", quote(ch)).at(position));
    }
    Transition::to(resolved, scan)
}

/// Resolve a finished word against the keyword set (case-insensitive)
fn resolve_identifier(
    lexeme: String,
    start: Position,
    context: ReadContext,
    scan: &mut Scan,
) -> LexerState {
    match lexeme.to_uppercase().as_str() {
        "THEN" => {
            scan.emit(Token::reserved(Reserved::Then).at(start));
            LexerState::StatementRead
        }
        "ELSEIF" => {
            scan.emit(Token::reserved(Reserved::ElseIf).at(start));
            LexerState::ConditionRead
        }
        "ELSE" => {
            scan.emit(Token::reserved(Reserved::Else).at(start));
            LexerState::StatementRead
        }
        "END" => LexerState::EndIfRead {
            start,
            seen_i: false,
        },
        "AND" => {
            scan.emit(Token::operator(Operator::And).at(start));
            context.state()
        }
        "OR" => {
            scan.emit(Token::operator(Operator::Or).at(start));
            context.state()
        }
        _ => {
            scan.emit(Token::operand(lexeme).at(start));
            context.state()
        }
    }
}

fn read_end_if(
    start: Position,
    seen_i: bool,
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    match (seen_i, ch.to_ascii_uppercase()) {
        (false, c) if c.is_whitespace() => {
            Transition::to(LexerState::EndIfRead { start, seen_i }, scan)
        }
        (false, 'I') => Transition::to(
            LexerState::EndIfRead {
                start,
                seen_i: true,
            },
            scan,
        ),
        (true, 'F') => {
            scan.emit(Token::reserved(Reserved::EndIf).at(start));
            Transition::to(LexerState::Terminal, scan)
        }
        _ => {
            scan.emit(Token::reserved(Reserved::EndIf).at(start));
            scan.report(EXPECTED_END_IF.builder().param("found", quote(ch)).at(position));
            Transition::to(LexerState::Terminal, scan)
        }
    }
}

fn read_statement(
    ch: char,
    position: Position,
    mut scan: Scan,
) -> Transition {
    if let Some(operator) = Operator::from_symbol(ch) {
        scan.emit(Token::operator(operator).at(position));
        return Transition::to(LexerState::StatementRead, scan);
    }
    if let Some(read) = start_read(ch, position, ReadContext::Statement) {
        return Transition::to(read, scan);
    }
    match ch {
        '=' => Transition::to(LexerState::EqualsOperatorRead { start: position }, scan),
        // whitespace and anything unrecognized
        _ => Transition::to(LexerState::StatementRead, scan),
    }
}
