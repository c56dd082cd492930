//! Condlang - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use condlang::backends::LineRepl;
use condlang::frontend::format::format_tokens;
use condlang::frontend::Analyzer;
use condlang::util::config::{
    load_config_from, load_user_config, resolve_config_path, save_config_to, OutputFormat,
    UserConfig,
};
use condlang::util::diagnostic::emitter::EmitterConfig;
use condlang::util::diagnostic::{JsonEmitter, TextEmitter};
use condlang::util::logger;
use condlang::{analyze, analyze_file, Analysis, NAME, VERSION};

/// Error-correcting analyzer and evaluator for IF/THEN/ELSE statements
#[derive(Parser, Debug)]
#[command(name = "condlang")]
#[command(author = "Condlang Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Use this config file instead of the user-level one
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze and evaluate a source file
    Run {
        /// Source file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Analyze and evaluate code from command line
    Eval {
        /// Code to evaluate
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print the corrected code and diagnostics without evaluating
    Check {
        /// Source file, or code when no such file exists
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Print the corrected tokens and their postfix view
    Tokens {
        /// Code to tokenize
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Start the interactive REPL
    Repl,

    /// Write the current settings to the config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_user_config().context("Failed to load user config")?,
    };
    if args.json {
        config.output.format = OutputFormat::Json;
    }

    if args.verbose {
        logger::init_debug();
        tracing::debug!("{} version: {}", NAME, VERSION);
        tracing::debug!("Host: {}", std::env::consts::OS);
    } else {
        logger::init_with_level(config.log.level);
    }

    match args.command {
        Commands::Run { file } => {
            let analysis = analyze_file(&file)
                .with_context(|| format!("Failed to run: {}", file.display()))?;
            report(&analysis, &config)?;
        }
        Commands::Eval { code } => {
            report(&analyze(&code), &config)?;
        }
        Commands::Check { input } => {
            let source = read_input(&input)?;
            check(&source, &config)?;
        }
        Commands::Tokens { code } => {
            let analysis = analyze(&code);
            if config.output.format == OutputFormat::Json {
                report(&analysis, &config)?;
            } else {
                let tokens = analysis
                    .tokens
                    .iter()
                    .map(|token| token.lexeme())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("Tokens: {}", tokens);
                match analysis.postfix() {
                    Ok(postfix) => {
                        let postfix = postfix
                            .iter()
                            .map(|token| token.lexeme())
                            .collect::<Vec<_>>()
                            .join(" ");
                        println!("Postfix: {}", postfix);
                    }
                    Err(err) => println!("Postfix: {}", err.to_diagnostic()),
                }
            }
        }
        Commands::Repl => {
            let mut repl = LineRepl::with_config(config.repl, config.output)
                .context("Failed to start REPL")?;
            repl.run().context("REPL failed")?;
        }
        Commands::Init { force } => {
            let path = resolve_config_path(args.config.as_deref())
                .context("Failed to locate config file")?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            save_config_to(&config, &path)
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Source text of a file, or the argument itself when no such file exists
fn read_input(input: &str) -> Result<String> {
    let path = Path::new(input);
    if path.is_file() {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    } else {
        Ok(input.to_string())
    }
}

fn report(
    analysis: &Analysis,
    config: &UserConfig,
) -> Result<()> {
    let rendered = analysis
        .render_for(&config.output)
        .context("Failed to render report")?;
    println!("{}", rendered);
    Ok(())
}

fn check(
    source: &str,
    config: &UserConfig,
) -> Result<()> {
    let syntax = Analyzer::new().check(source);
    let code = format_tokens(&syntax.tokens);

    if config.output.format == OutputFormat::Json {
        let diagnostics = JsonEmitter::new()
            .render_all(&syntax.diagnostics)
            .context("Failed to render diagnostics")?;
        println!("{}", diagnostics);
        return Ok(());
    }

    if syntax.diagnostics.is_empty() {
        println!("{}\n\nNo errors", code);
    } else {
        let emitter = TextEmitter::with_config(EmitterConfig {
            use_colors: config.output.colors,
            show_codes: config.output.show_codes,
        });
        println!(
            "Corrected code:\n{}\n\nErrors:\n{}",
            code,
            emitter.render_all(&syntax.diagnostics)
        );
    }
    Ok(())
}
