//! 基础测试 - 位置、空白符、大小写

use crate::frontend::lexer::{tokenize, Operator, Reserved, Token};
use crate::util::span::Position;

#[cfg(test)]
mod lexer_basic_tests {
    use super::*;

    #[test]
    fn test_empty_source_forces_if_and_end_if() {
        let analysis = tokenize("");
        assert_eq!(
            analysis.tokens,
            vec![Token::reserved(Reserved::If), Token::reserved(Reserved::EndIf)]
        );
        let codes: Vec<_> = analysis.diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["E0001", "E0006"]);
    }

    #[test]
    fn test_simple_statement() {
        let analysis = tokenize("IF 1 > 0 THEN 5 + 3 END IF");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(
            analysis.tokens,
            vec![
                Token::reserved(Reserved::If),
                Token::operand("1"),
                Token::operator(Operator::Greater),
                Token::operand("0"),
                Token::reserved(Reserved::Then),
                Token::operand("5"),
                Token::operator(Operator::Plus),
                Token::operand("3"),
                Token::reserved(Reserved::EndIf),
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        let analysis = tokenize("IF 1 > 0 THEN 5 + 3 END IF");
        let positions: Vec<_> = analysis
            .tokens
            .iter()
            .map(|t| t.position.map(|p| p.column))
            .collect();
        assert_eq!(
            positions,
            vec![
                Some(1),
                Some(4),
                Some(6),
                Some(8),
                Some(10),
                Some(15),
                Some(17),
                Some(19),
                Some(21)
            ]
        );
    }

    #[test]
    fn test_multiline_positions() {
        let analysis = tokenize("IF 1 > 0\nTHEN 2\nELSE 3\nEND IF");
        assert!(analysis.diagnostics.is_empty());
        let then = &analysis.tokens[4];
        assert!(then.is_reserved(Reserved::Then));
        assert_eq!(then.position, Some(Position::new(2, 1)));
        let else_token = &analysis.tokens[6];
        assert!(else_token.is_reserved(Reserved::Else));
        assert_eq!(else_token.position, Some(Position::new(3, 1)));
        let end_if = analysis.tokens.last().unwrap();
        assert!(end_if.is_reserved(Reserved::EndIf));
        assert_eq!(end_if.position, Some(Position::new(4, 1)));
    }

    #[test]
    fn test_leading_whitespace() {
        let analysis = tokenize("  \n IF 1 < 2 THEN 1 END IF");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.tokens[0].position, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_case_insensitive_keywords_keep_operand_case() {
        let analysis = tokenize("if True and false then 1 else 2 end if");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(
            analysis.tokens,
            vec![
                Token::reserved(Reserved::If),
                Token::operand("True"),
                Token::operator(Operator::And),
                Token::operand("false"),
                Token::reserved(Reserved::Then),
                Token::operand("1"),
                Token::reserved(Reserved::Else),
                Token::operand("2"),
                Token::reserved(Reserved::EndIf),
            ]
        );
    }

    #[test]
    fn test_literal_identifier_is_operand() {
        let analysis = tokenize("IF x == 1 THEN 1 END IF");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.tokens[1], Token::operand("x"));
        assert_eq!(analysis.tokens[2], Token::operator(Operator::Equals));
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        let analysis = tokenize("IF my_var2 > 0 THEN 1 END IF");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.tokens[1], Token::operand("my_var2"));
    }

    #[test]
    fn test_trailing_whitespace_after_end_if() {
        let analysis = tokenize("IF 1 > 0 THEN 1 END IF   \n\t");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.tokens.len(), 7);
    }
}
