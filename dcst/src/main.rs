//! dcst - A command-line tool for inspecting stylesheet tokens.
//!
//! This is the main entry point for the dcst CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_tokens, TokensArgs};
use config::{Config, OutputFormat};
use error::{DcstError, Result};

/// dcst - Inspect the token stream of CSS-family stylesheets
#[derive(Parser, Debug)]
#[command(name = "dcst")]
#[command(author = "Dotcss Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the token stream of CSS-family stylesheets", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DCST_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DCST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "DCST_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dcst CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a stylesheet
    ///
    /// Scans the file and prints one token per line, or a JSON array of
    /// token records with `--format json`.
    Tokens(TokensCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Stylesheet to scan
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep whitespace tokens
    #[arg(long)]
    whitespace: bool,

    /// Drop comment tokens
    #[arg(long)]
    no_comments: bool,

    /// Prefix each line with line:column
    #[arg(long)]
    positions: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token listings on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DcstError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(tokens_args(args, &config)),
    }
}

/// Merge command-line flags over the configuration file.
fn tokens_args(args: TokensCommand, config: &Config) -> TokensArgs {
    let mut scanner = config.scanner.clone();
    if args.whitespace {
        scanner.ignore_whitespace = false;
    }
    if args.no_comments {
        scanner.ignore_comment = true;
    }

    TokensArgs {
        file: args.file,
        format: args.format.unwrap_or(config.output.format),
        positions: args.positions || config.output.positions,
        options: scanner.options(),
    }
}
