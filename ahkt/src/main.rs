//! Ahkt CLI - A command-line tool for styling AutoHotkey scripts.
//!
//! This is the main entry point for the ahkt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::traits::{run_to_stdout, Command};
use commands::{FoldArgs, FoldCommand, ListsArgs, ListsCommand, StyleArgs, StyleCommand};
use config::Config;
use error::{AhktError, Result};

/// Ahkt - A CLI tool for styling AutoHotkey scripts
///
/// Ahkt runs the incremental syntax classifier over script files and prints
/// the resulting styles or fold levels.
#[derive(Parser, Debug)]
#[command(name = "ahkt")]
#[command(author = "Ahkl Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for styling AutoHotkey scripts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "AHKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "AHKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "AHKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ahkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the styled runs of a script
    ///
    /// Styles the whole script with the configured keyword lists and prints
    /// one line per run of equally styled bytes.
    Style(StyleCommandArgs),

    /// Print the fold level of every line
    Fold(FoldCommandArgs),

    /// Show the keyword lists and their configured sizes
    Lists(ListsCommandArgs),
}

/// Arguments for the style subcommand.
#[derive(Parser, Debug)]
struct StyleCommandArgs {
    /// Script to style
    file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<OutputFormat>,

    /// Only report what an edit at this byte offset restyles
    #[arg(long)]
    from: Option<usize>,

    /// Print the text of each run
    #[arg(short = 't', long)]
    show_text: bool,
}

/// Arguments for the fold subcommand.
#[derive(Parser, Debug)]
struct FoldCommandArgs {
    /// Script to fold
    file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<OutputFormat>,

    /// Also print the packed level each line would carry in an editor
    #[arg(long)]
    packed: bool,
}

/// Arguments for the lists subcommand.
#[derive(Parser, Debug)]
struct ListsCommandArgs {
    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<OutputFormat>,

    /// Print the configured words of every list
    #[arg(short, long)]
    words: bool,
}

/// Main entry point for the ahkt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    let no_color = cli.no_color || !config.output.color;
    init_logging(verbose, no_color)?;
    tracing::debug!(?cli.config, "configuration ready");

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with command output.
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
        .map_err(|e| AhktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Style(args) => execute_style(args, config),
        Commands::Fold(args) => execute_fold(args, config),
        Commands::Lists(args) => execute_lists(args, config),
    }
}

/// Execute the style command.
fn execute_style(args: StyleCommandArgs, config: Config) -> Result<()> {
    let style_args = StyleArgs {
        file: args.file,
        format: args.format,
        from: args.from,
        show_text: args.show_text,
    };
    run_to_stdout(&StyleCommand::new(style_args).with_config(config))
}

/// Execute the fold command.
fn execute_fold(args: FoldCommandArgs, config: Config) -> Result<()> {
    let fold_args = FoldArgs {
        file: args.file,
        format: args.format,
        packed: args.packed,
    };
    run_to_stdout(&FoldCommand::new(fold_args).with_config(config))
}

/// Execute the lists command.
fn execute_lists(args: ListsCommandArgs, config: Config) -> Result<()> {
    let lists_args = ListsArgs {
        format: args.format,
        words: args.words,
    };
    run_to_stdout(&ListsCommand::new(lists_args).with_config(config))
}
