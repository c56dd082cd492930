//! Grammar rules with neutralization
//!
//! ```text
//! Z -> IF B THEN A { ELSEIF B THEN A } [ ELSE A ] END IF
//! B -> C { (AND | OR) C }
//! C -> A (== | > | <) A
//! A -> operand { (+ | - | * | /) operand }
//! ```
//!
//! Each rule accepts what matches and synthesizes what is missing, so the
//! output always derives from `Z`. Operator precedence is not resolved here.

use super::parser_state::ParserState;
use crate::frontend::lexer::tokens::{Operator, Reserved, Token, TokenKind};
use crate::util::diagnostic::codes::{
    MISSING_CONDITION, MISSING_ELSE, MISSING_END_IF, MISSING_IF, MISSING_OPERAND, MISSING_THEN,
};

/// Operand inserted where one is missing
const SYNTHETIC_OPERAND: &str = "0";

/// Rule Z: the whole statement
pub fn parse_statement(state: &mut ParserState<'_>) {
    state.expect(Reserved::If, MISSING_IF);
    state.skip_unexpected_until(|t| !t.is_reserved(Reserved::If));

    parse_condition(state);
    parse_then(state);
    parse_arithmetic(state);

    let branch_end = |t: &Token| {
        t.is_operand()
            || t.is_reserved(Reserved::ElseIf)
            || t.is_reserved(Reserved::Else)
            || t.is_reserved(Reserved::EndIf)
    };
    state.skip_unexpected_until(branch_end);

    while state.skip(Reserved::ElseIf) {
        parse_condition(state);
        parse_then(state);
        parse_arithmetic(state);
        state.skip_unexpected_until(branch_end);
    }

    if state.skip(Reserved::Else) {
        parse_arithmetic(state);
    } else if state.at_operand() {
        state.synthesize(Token::reserved(Reserved::Else), MISSING_ELSE);
        parse_arithmetic(state);
    }

    state.skip_unexpected_until(|t| t.is_reserved(Reserved::EndIf));
    state.expect(Reserved::EndIf, MISSING_END_IF);
    state.drop_rest();
}

/// Stray operators left over by the condition are dropped before `THEN`
fn parse_then(state: &mut ParserState<'_>) {
    state.skip_unexpected_until(|t| t.as_operator().is_none());
    state.expect(Reserved::Then, MISSING_THEN);
}

/// Rule B: comparisons joined by `AND` / `OR`
pub fn parse_condition(state: &mut ParserState<'_>) {
    parse_comparison(state);
    while state.at_operator(Operator::is_logical).is_some() {
        state.accept();
        parse_comparison(state);
    }
}

/// Rule C: `A cmp A`
///
/// A lone non-integer operand (`true`, `x`) is kept as is. An empty
/// comparison becomes `0 == 0`; any other incomplete one gets `== 0`.
pub fn parse_comparison(state: &mut ParserState<'_>) {
    if !starts_arithmetic(state) {
        state.report(MISSING_CONDITION);
        state.insert(Token::operand(SYNTHETIC_OPERAND));
        state.insert(Token::operator(Operator::Equals));
        state.insert(Token::operand(SYNTHETIC_OPERAND));
        return;
    }

    let start = state.output_len();
    parse_arithmetic(state);

    if state.at_operator(Operator::is_comparison).is_some() {
        state.accept();
        parse_arithmetic(state);
        return;
    }

    if let [single] = state.output_since(start) {
        if is_bare_condition(single) {
            return;
        }
    }
    state.report(MISSING_CONDITION);
    state.insert(Token::operator(Operator::Equals));
    state.insert(Token::operand(SYNTHETIC_OPERAND));
}

/// Rule A: operands joined by arithmetic operators
pub fn parse_arithmetic(state: &mut ParserState<'_>) {
    parse_operand(state);
    while state.at_operator(Operator::is_arithmetic).is_some() {
        state.accept();
        parse_operand(state);
    }
}

fn parse_operand(state: &mut ParserState<'_>) {
    if state.at_operand() {
        state.accept();
    } else {
        state.synthesize(Token::operand(SYNTHETIC_OPERAND), MISSING_OPERAND);
    }
}

/// Whether rule A can start here without inventing the whole comparison
fn starts_arithmetic(state: &ParserState<'_>) -> bool {
    state.at_operand() || state.at_operator(|op| !op.is_logical()).is_some()
}

fn is_bare_condition(token: &Token) -> bool {
    match &token.kind {
        TokenKind::Operand(lexeme) => !lexeme.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}
