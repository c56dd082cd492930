//! Interactive backends
//!
//! - [`repl::LineRepl`] - line REPL built on rustyline

pub mod repl;

pub use repl::{LineRepl, StatementBuffer};
