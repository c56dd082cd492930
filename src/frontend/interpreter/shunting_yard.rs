//! Infix to postfix conversion
//!
//! The language has no parentheses, so a single operator stack suffices.

use super::error::EvalError;
use crate::frontend::lexer::tokens::{Operator, Token, TokenKind};

/// Binding strength; higher binds tighter
pub fn precedence(operator: Operator) -> u8 {
    match operator {
        Operator::Multiply | Operator::Divide => 20,
        Operator::Plus | Operator::Minus => 10,
        Operator::Equals | Operator::Greater | Operator::Lesser => 5,
        Operator::And => 1,
        Operator::Or => 0,
    }
}

/// Reorder one region (condition or branch body) into postfix.
///
/// Operators of equal precedence associate to the left.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(Operator, &Token)> = Vec::new();

    for token in tokens {
        match &token.kind {
            TokenKind::Operand(_) => output.push(token.clone()),
            TokenKind::Operator(operator) => {
                while let Some((top, top_token)) = stack.last() {
                    if precedence(*top) < precedence(*operator) {
                        break;
                    }
                    output.push((*top_token).clone());
                    stack.pop();
                }
                stack.push((*operator, token));
            }
            TokenKind::Reserved(reserved) => {
                return Err(EvalError::IllegalArgument(format!(
                    "'{}' cannot appear inside an expression",
                    reserved.lexeme()
                )));
            }
        }
    }

    output.extend(stack.into_iter().rev().map(|(_, token)| token.clone()));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::tokens::Reserved;

    fn lexemes(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.lexeme().to_string()).collect()
    }

    #[test]
    fn test_precedence_table() {
        assert!(precedence(Operator::Multiply) > precedence(Operator::Plus));
        assert!(precedence(Operator::Minus) > precedence(Operator::Greater));
        assert_eq!(precedence(Operator::Equals), precedence(Operator::Lesser));
        assert!(precedence(Operator::Lesser) > precedence(Operator::And));
        assert!(precedence(Operator::And) > precedence(Operator::Or));
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tokens = vec![
            Token::operand("1"),
            Token::operator(Operator::Plus),
            Token::operand("2"),
            Token::operator(Operator::Multiply),
            Token::operand("3"),
        ];
        assert_eq!(
            lexemes(&to_postfix(&tokens).unwrap()),
            vec!["1", "2", "3", "*", "+"]
        );
    }

    #[test]
    fn test_left_associative() {
        let tokens = vec![
            Token::operand("8"),
            Token::operator(Operator::Minus),
            Token::operand("3"),
            Token::operator(Operator::Minus),
            Token::operand("2"),
        ];
        assert_eq!(
            lexemes(&to_postfix(&tokens).unwrap()),
            vec!["8", "3", "-", "2", "-"]
        );
    }

    #[test]
    fn test_logical_levels() {
        let tokens = vec![
            Token::operand("a"),
            Token::operator(Operator::Or),
            Token::operand("b"),
            Token::operator(Operator::And),
            Token::operand("c"),
        ];
        assert_eq!(
            lexemes(&to_postfix(&tokens).unwrap()),
            vec!["a", "b", "c", "AND", "OR"]
        );
    }

    #[test]
    fn test_empty_region() {
        assert!(to_postfix(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_reserved_token_is_rejected() {
        let tokens = vec![Token::operand("1"), Token::reserved(Reserved::Then)];
        let err = to_postfix(&tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal argument: 'THEN' cannot appear inside an expression"
        );
    }
}
