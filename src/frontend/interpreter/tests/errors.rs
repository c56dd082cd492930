//! 致命错误测试

use super::run;
use crate::frontend::interpreter::{EvalError, Interpreter};
use crate::frontend::lexer::tokenize;
use crate::frontend::lexer::tokens::{Operator, Reserved, Token};

#[cfg(test)]
mod eval_error_tests {
    use super::*;

    fn statement(condition: Vec<Token>) -> Vec<Token> {
        let mut tokens = vec![Token::reserved(Reserved::If)];
        tokens.extend(condition);
        tokens.push(Token::reserved(Reserved::Then));
        tokens.push(Token::operand("1"));
        tokens.push(Token::reserved(Reserved::EndIf));
        tokens
    }

    #[test]
    fn test_literal_identifier() {
        let err = run("IF x == 1 THEN 1 END IF").unwrap_err();
        assert_eq!(err, EvalError::LiteralIdentifier("x".to_string()));
        assert_eq!(err.to_string(), "Literal identifier 'x' is not supported");
    }

    #[test]
    fn test_elseif_is_unsupported() {
        let err = run("IF true THEN 1 ELSEIF false THEN 2 END IF").unwrap_err();
        assert_eq!(err, EvalError::ElseIfUnsupported);
        assert_eq!(err.code(), "E2007");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            run("IF true THEN 1 / 0 END IF"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            run("IF true THEN 9223372036854775807 + 1 END IF"),
            Err(EvalError::Overflow("+"))
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(
            run("IF true THEN 99999999999999999999 END IF"),
            Err(EvalError::IntegerOutOfRange(
                "99999999999999999999".to_string()
            ))
        );
    }

    #[test]
    fn test_comparison_needs_numbers() {
        let err = run("IF true > 1 THEN 1 END IF").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch: '>' expects number, found boolean"
        );
    }

    #[test]
    fn test_logical_needs_booleans() {
        let tokens = tokenize("IF 5 AND true THEN 1 END IF").tokens;
        let err = Interpreter::new().evaluate(&tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch: 'AND' expects boolean, found number"
        );
    }

    #[test]
    fn test_condition_must_be_boolean() {
        let tokens = statement(vec![Token::operand("1")]);
        let err = Interpreter::new().evaluate(&tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch: 'IF' expects boolean, found number"
        );
    }

    #[test]
    fn test_missing_operand() {
        let tokens = statement(vec![Token::operand("1"), Token::operator(Operator::Greater)]);
        assert_eq!(
            Interpreter::new().interpret(&tokens),
            Err(EvalError::MissingOperand {
                operator: ">",
                found: 1
            })
        );
    }

    #[test]
    fn test_malformed_region() {
        let tokens = statement(vec![Token::operand("1"), Token::operand("2")]);
        assert_eq!(
            Interpreter::new().interpret(&tokens),
            Err(EvalError::MalformedExpression {
                region: "condition",
                found: 2
            })
        );

        let tokens = statement(Vec::new());
        assert_eq!(
            Interpreter::new().interpret(&tokens),
            Err(EvalError::MalformedExpression {
                region: "condition",
                found: 0
            })
        );
    }

    #[test]
    fn test_unclosed_statement() {
        let tokens = vec![
            Token::reserved(Reserved::If),
            Token::operand("true"),
            Token::reserved(Reserved::Then),
            Token::operand("1"),
        ];
        let err = Interpreter::new().interpret(&tokens).unwrap_err();
        assert!(matches!(err, EvalError::IllegalState(_)));
    }

    #[test]
    fn test_out_of_order_reserved_word() {
        let tokens = vec![
            Token::reserved(Reserved::Then),
            Token::operand("1"),
            Token::reserved(Reserved::EndIf),
        ];
        let err = Interpreter::new().interpret(&tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal interpreter state: unexpected 'THEN' before IF"
        );
    }

    #[test]
    fn test_tokens_after_end_if() {
        let mut tokens = statement(vec![Token::operand("true")]);
        tokens.push(Token::operand("2"));
        let err = Interpreter::new().interpret(&tokens).unwrap_err();
        assert!(matches!(err, EvalError::IllegalState(_)));
    }

    #[test]
    fn test_messages_match_registered_templates() {
        let errors = vec![
            EvalError::TypeMismatch {
                operator: "+",
                expected: "number",
                found: "boolean",
            },
            EvalError::LiteralIdentifier("x".to_string()),
            EvalError::IntegerOutOfRange("1".to_string()),
            EvalError::IllegalArgument("bad".to_string()),
            EvalError::MissingOperand {
                operator: "*",
                found: 0,
            },
            EvalError::MalformedExpression {
                region: "condition",
                found: 3,
            },
            EvalError::ElseIfUnsupported,
            EvalError::IllegalState("bad".to_string()),
            EvalError::DivisionByZero,
            EvalError::Overflow("-"),
        ];
        for err in errors {
            let diagnostic = err.to_diagnostic();
            assert_eq!(diagnostic.message, err.to_string());
            assert_eq!(diagnostic.code, err.code());
            assert!(diagnostic.code.starts_with("E2"));
        }
    }
}
