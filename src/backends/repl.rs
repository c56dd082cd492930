//! Line-based REPL with rustyline
//!
//! Lines are collected until the statement is closed by `END IF` or a blank
//! line, then the whole buffer is analyzed and the report printed.

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::frontend::Analyzer;
use crate::util::config::{OutputConfig, ReplConfig};
use crate::{NAME, VERSION};

/// Command result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Exit the REPL
    Exit,
    /// Continue to next input
    Continue,
    /// Output a message
    Output(String),
}

/// Source lines of the statement being typed
#[derive(Debug, Default)]
pub struct StatementBuffer {
    lines: Vec<String>,
}

impl StatementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Add a line; returns the complete source once the statement is closed
    pub fn push(
        &mut self,
        line: &str,
    ) -> Option<String> {
        if line.trim().is_empty() {
            if self.is_empty() {
                return None;
            }
            return Some(self.take());
        }

        self.lines.push(line.to_string());
        if closes_statement(line) {
            Some(self.take())
        } else {
            None
        }
    }

    fn take(&mut self) -> String {
        std::mem::take(&mut self.lines).join("\n")
    }
}

/// Whether `line` contains `END IF` (any case, any blanks in between)
fn closes_statement(line: &str) -> bool {
    let words: Vec<String> = line.split_whitespace().map(str::to_ascii_uppercase).collect();
    words.windows(2).any(|pair| pair[0] == "END" && pair[1] == "IF")
}

/// Handle a line starting with ':'
pub fn handle_command(
    line: &str,
    buffer: &mut StatementBuffer,
) -> CommandResult {
    let cmd = line.trim_start_matches(':').trim();

    match cmd {
        "quit" | "q" => CommandResult::Exit,
        "help" | "h" => CommandResult::Output(help_text()),
        "clear" | "c" => {
            buffer.clear();
            CommandResult::Output("Buffer cleared".to_string())
        }
        "" => CommandResult::Continue,
        _ => CommandResult::Output(format!("Unknown command: {}", line)),
    }
}

fn help_text() -> String {
    [
        "Type a statement such as: IF 1 > 0 THEN 5 + 3 ELSE 0 END IF",
        "Input is analyzed after END IF or an empty line.",
        "",
        "Available commands:",
        "  :quit, :q      - Exit the REPL",
        "  :help, :h      - Show this help",
        "  :clear, :c     - Discard the statement being typed",
    ]
    .join("\n")
}

/// Line REPL
pub struct LineRepl {
    config: ReplConfig,
    output: OutputConfig,
    editor: DefaultEditor,
    analyzer: Analyzer,
    buffer: StatementBuffer,
}

impl LineRepl {
    /// Create with custom config
    pub fn with_config(
        config: ReplConfig,
        output: OutputConfig,
    ) -> rustyline::Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .build();

        let mut editor = DefaultEditor::with_config(rl_config)?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                if let Err(err) = editor.load_history(history_file) {
                    tracing::warn!("Failed to load history: {}", err);
                }
            }
        }

        Ok(Self {
            config,
            output,
            editor,
            analyzer: Analyzer::new(),
            buffer: StatementBuffer::new(),
        })
    }

    /// Run the REPL
    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("{} {} REPL - Type :help for assistance", NAME, VERSION);
        println!("Press Ctrl+D or :quit to exit\n");

        loop {
            let prompt = if self.buffer.is_empty() {
                &self.config.prompt
            } else {
                &self.config.continuation_prompt
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    // Handle commands
                    if line.trim_start().starts_with(':') {
                        match handle_command(&line, &mut self.buffer) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                            CommandResult::Output(msg) => {
                                println!("{}", msg);
                                continue;
                            }
                        }
                    }

                    if let Some(source) = self.buffer.push(&line) {
                        self.evaluate(&source);
                    }
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    self.buffer.clear();
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            if let Err(err) = self.editor.save_history(history_file) {
                tracing::warn!("Failed to save history: {}", err);
            }
        }

        Ok(())
    }

    fn evaluate(
        &self,
        source: &str,
    ) {
        let analysis = self.analyzer.analyze(source);
        match analysis.render_for(&self.output) {
            Ok(report) => println!("{}\n", report),
            Err(err) => eprintln!("Failed to render report: {}", err),
        }
    }
}
