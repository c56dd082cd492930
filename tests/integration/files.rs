//! File-based entry points

use condlang::{analyze_file, run_file, Value};
use std::fs;

#[test]
fn test_run_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.cond");
    fs::write(&path, "IF 1 > 0\nTHEN 5 + 3\nEND IF\n").unwrap();

    assert_eq!(run_file(&path).unwrap(), Value::Number(8));
}

#[test]
fn test_analyze_file_reports_corrections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.cond");
    fs::write(&path, "IF 1 > 0 5 END IF").unwrap();

    let analysis = analyze_file(&path).unwrap();
    assert_eq!(analysis.diagnostics.len(), 1);
    assert!(analysis.render().starts_with("Corrected code:\nIF 1 > 0 THEN\n\t5\nEND IF"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(&dir.path().join("absent.cond")).unwrap_err();

    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn test_uninterpretable_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("literal.cond");
    fs::write(&path, "IF x == 1 THEN 1 END IF").unwrap();

    let err = run_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Cannot interpret"));
}
