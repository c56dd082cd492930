//! Condlang
//!
//! An error-correcting front end and evaluator for single-statement
//! `IF ... THEN ... [ELSE ...] END IF` expressions.
//!
//! # Example
//!
//! ```
//! use condlang::{analyze, Value};
//!
//! let analysis = analyze("IF 1 > 0 THEN 5 + 3 END IF");
//! assert!(analysis.diagnostics.is_empty());
//! assert_eq!(analysis.result, Ok(Value::Number(8)));
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod backends;
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::interpreter::{EvalError, Value};
pub use frontend::{Analysis, Analyzer};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Condlang";

/// Analyze source code: corrected tokens, diagnostics and the evaluation result
pub fn analyze(source: &str) -> Analysis {
    debug!("analyze called");
    Analyzer::new().analyze(source)
}

/// Analyze a file
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    debug!("Analyzing file: {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(analyze(&source))
}

/// Evaluate source code, failing when it cannot be interpreted
///
/// Diagnostics do not make this fail; the corrected code is evaluated.
///
/// ```
/// use condlang::{run, Value};
///
/// assert_eq!(run("IF true AND false THEN 1 ELSE 2 END IF").unwrap(), Value::Number(2));
/// assert!(run("IF x == 1 THEN 1 END IF").is_err());
/// ```
pub fn run(source: &str) -> Result<Value> {
    let analysis = analyze(source);
    let value = analysis.result.context("Cannot interpret")?;
    Ok(value)
}

/// Evaluate a file
pub fn run_file(path: &Path) -> Result<Value> {
    let analysis = analyze_file(path)?;
    let value = analysis
        .result
        .with_context(|| format!("Cannot interpret {}", path.display()))?;
    Ok(value)
}
