//! ParserState 单元测试

use crate::frontend::lexer::tokens::{Operator, Reserved, Token};
use crate::frontend::parser::ParserState;
use crate::util::diagnostic::codes::MISSING_THEN;
use crate::util::span::Position;

#[cfg(test)]
mod parser_state_tests {
    use super::*;

    fn sample() -> Vec<Token> {
        vec![
            Token::reserved(Reserved::If).at(Position::new(1, 1)),
            Token::operand("a").at(Position::new(1, 4)),
            Token::operator(Operator::Plus).at(Position::new(1, 6)),
        ]
    }

    #[test]
    fn test_accept_and_skip() {
        let tokens = sample();
        let mut state = ParserState::new(&tokens);
        assert!(state.skip(Reserved::If));
        assert!(!state.skip(Reserved::Then));
        assert!(state.at_operand());
        state.accept();
        assert_eq!(state.at_operator(Operator::is_arithmetic), Some(Operator::Plus));
        assert_eq!(state.at_operator(Operator::is_logical), None);
        state.accept();
        assert!(state.at_end());
        let (output, diagnostics) = state.finish();
        assert_eq!(output, tokens);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_synthesized_token_takes_next_position() {
        let tokens = sample();
        let mut state = ParserState::new(&tokens[1..]);
        state.expect(Reserved::Then, MISSING_THEN);
        let (output, diagnostics) = state.finish();
        assert_eq!(output, vec![Token::reserved(Reserved::Then)]);
        assert_eq!(output[0].position, Some(Position::new(1, 4)));
        assert_eq!(diagnostics[0].to_string(), "Syntax error: Missing THEN: (1,4)");
    }

    #[test]
    fn test_synthesized_at_end_has_no_position() {
        let tokens: Vec<Token> = Vec::new();
        let mut state = ParserState::new(&tokens);
        state.expect(Reserved::Then, MISSING_THEN);
        let (output, diagnostics) = state.finish();
        assert_eq!(output[0].position, None);
        assert_eq!(diagnostics[0].to_string(), "Syntax error: Missing THEN");
    }

    #[test]
    fn test_drop_rest_reports_once() {
        let tokens = sample();
        let mut state = ParserState::new(&tokens);
        state.drop_rest();
        assert!(state.at_end());
        let (output, diagnostics) = state.finish();
        assert!(output.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unexpected token 'IF'");
    }
}
