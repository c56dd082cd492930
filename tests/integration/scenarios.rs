//! End-to-end behavior of whole statements

use condlang::frontend::lexer::tokens::Reserved;
use condlang::{analyze, run, EvalError, Value};

fn lexemes(tokens: &[condlang::frontend::lexer::tokens::Token]) -> Vec<String> {
    tokens.iter().map(|t| t.lexeme().to_string()).collect()
}

#[test]
fn test_clean_statement_evaluates() {
    let analysis = analyze("IF 1 > 0 THEN 5 + 3 END IF");

    assert!(analysis.diagnostics.is_empty());
    assert_eq!(analysis.result, Ok(Value::Number(8)));
    assert_eq!(
        lexemes(&analysis.postfix().unwrap()),
        vec!["IF", "1", "0", ">", "THEN", "5", "3", "+", "END IF"]
    );
}

#[test]
fn test_false_condition_takes_else_branch() {
    let analysis = analyze("IF true AND false THEN 1 ELSE 2 END IF");

    assert!(analysis.diagnostics.is_empty());
    assert_eq!(analysis.result, Ok(Value::Number(2)));
}

#[test]
fn test_missing_then_is_synthesized() {
    let analysis = analyze("IF 1 > 0 5 END IF");

    assert!(analysis.tokens.iter().any(|t| t.is_reserved(Reserved::Then)));
    let messages: Vec<String> = analysis.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(messages, vec!["Syntax error: Missing THEN: (1,10)"]);
    assert_eq!(analysis.result, Ok(Value::Number(5)));
}

#[test]
fn test_literal_identifier_fails_evaluation_only() {
    let analysis = analyze("IF x == 1 THEN 1 END IF");

    assert!(analysis.diagnostics.is_empty());
    assert_eq!(
        analysis.result,
        Err(EvalError::LiteralIdentifier("x".to_string()))
    );
    assert!(run("IF x == 1 THEN 1 END IF").is_err());
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(
        run("if 2 * 3 == 6 then 10 / 2 else 0 end if").unwrap(),
        Value::Number(5)
    );
}

#[test]
fn test_if_without_else_yields_null() {
    assert_eq!(run("IF 1 < 0 THEN 7 END IF").unwrap(), Value::Null);
}

#[test]
fn test_multiline_statement() {
    let source = "IF 3 > 2 OR false\nTHEN\n\t4 * 4\nELSE\n\t0\nEND IF\n";
    let analysis = analyze(source);

    assert!(analysis.is_clean());
    assert_eq!(analysis.result, Ok(Value::Number(16)));
    assert_eq!(analysis.formatted(), "IF 3 > 2 OR false THEN\n\t4 * 4\nELSE\n\t0\nEND IF");
}

#[test]
fn test_division_by_zero_is_reported() {
    let analysis = analyze("IF true THEN 1 / 0 END IF");

    assert!(analysis.is_clean());
    assert_eq!(analysis.result, Err(EvalError::DivisionByZero));
    assert!(analysis.render().contains("Cannot interpret"));
}
