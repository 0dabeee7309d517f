//! Monkey CLI - interactive front end for the Monkey lexer.
//!
//! This is the main entry point for the `monkey` binary. It uses clap for
//! argument parsing and dispatches to the REPL or the token dump command.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    repl::{run_repl, ReplArgs},
    tokenize::{run_tokenize, TokenizeArgs},
};
use config::Config;
use error::{ReplError, Result};

/// Log filter used when neither `--verbose` nor `RUST_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "info";

/// Monkey - REPL and tokenizer for the Monkey programming language
///
/// Without a subcommand, starts the interactive REPL.
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "REPL and tokenizer for the Monkey programming language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MONKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MONKEY_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the monkey CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive REPL
    ///
    /// Reads one line at a time and prints the tokens it contains.
    Repl(ReplCommand),

    /// Print every token of a source file
    ///
    /// Reads the whole file (or stdin) and prints its tokens, including
    /// the final EOF token.
    Tokenize(TokenizeCommand),
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug, Default)]
struct ReplCommand {
    /// Prompt shown before each line (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Do not print the welcome banner
    #[arg(long)]
    no_greeting: bool,

    /// Token output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to tokenize ("-" or omitted for stdin)
    input: Option<PathBuf>,

    /// Token output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error if the source contains illegal characters
    #[arg(long)]
    deny_illegal: bool,
}

/// Main entry point for the monkey CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(subscriber)
        .try_init()
        .map_err(|e| ReplError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Builds the log filter: `debug` with `--verbose`, otherwise `RUST_LOG`,
/// falling back to [`DEFAULT_LOG_FILTER`].
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, defaulting to the REPL.
fn execute_command(command: Option<Commands>, config: Config) -> Result<()> {
    match command.unwrap_or_else(|| Commands::Repl(ReplCommand::default())) {
        Commands::Repl(args) => run_repl(repl_args(args, &config)),
        Commands::Tokenize(args) => run_tokenize(tokenize_args(args, &config)),
    }
}

/// Merge repl flags over the configuration.
fn repl_args(args: ReplCommand, config: &Config) -> ReplArgs {
    ReplArgs {
        prompt: args.prompt.unwrap_or_else(|| config.repl.prompt.clone()),
        greeting: config.repl.greeting && !args.no_greeting,
        format: args.format.unwrap_or(config.output.format),
    }
}

/// Merge tokenize flags over the configuration.
fn tokenize_args(args: TokenizeCommand, config: &Config) -> TokenizeArgs {
    TokenizeArgs {
        input: args.input,
        format: args.format.unwrap_or(config.output.format),
        deny_illegal: args.deny_illegal,
    }
}
