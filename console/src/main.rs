//! Widgetboard - dashboard widget catalog console.
//!
//! # Commands
//!
//! - `widgetboard list`: Print the demo catalog
//! - `widgetboard search <term>`: Search widget names and descriptions
//! - `widgetboard presets [group]`: List predefined widget templates
//! - `widgetboard shell`: Run the interactive command shell
//!
//! # Environment Variables
//!
//! See the [`config`](widgetboard_console::config) module for available
//! configuration options.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use widgetboard_console::command::Command;
use widgetboard_console::config::{Config, OutputFormat};
use widgetboard_console::shell::Shell;
use widgetboard_core::DashboardStore;

/// Widgetboard - dashboard widget catalog console.
///
/// Starts from the demo catalog on every run; nothing is saved.
#[derive(Parser, Debug)]
#[command(name = "widgetboard")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    WIDGETBOARD_ID_STRATEGY    Widget id generator: sequential or random (default: sequential)
    WIDGETBOARD_ID_PREFIX      Prefix for sequential ids (default: widget)
    WIDGETBOARD_OUTPUT         Output format: text or json (default: text)
    WIDGETBOARD_PROMPT         Interactive prompt (default: '> ')
    RUST_LOG                   Log filter, written to stderr (default: info)

EXAMPLES:
    # Show the demo catalog
    widgetboard list

    # Find every alert widget, as JSON
    widgetboard --json search alert

    # Run a script of shell commands
    widgetboard shell --script dashboard.wb
")]
struct Cli {
    /// Print results as JSON, one document per line.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: CliCommand,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print every category and widget.
    List,

    /// Search widget names and descriptions, ignoring case.
    Search {
        /// Words to search for, joined by single spaces.
        #[arg(required = true)]
        term: Vec<String>,
    },

    /// List predefined widget groups, or the widgets of one group.
    Presets {
        /// Group key (cspm, cwpp, image, ticket).
        group: Option<String>,
    },

    /// Run the command shell.
    ///
    /// Reads commands from the script file, or from stdin when no script is
    /// given. Type 'help' for the command list.
    Shell {
        /// File of shell commands to run instead of reading stdin.
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    info!(
        id_strategy = ?config.id_strategy,
        output = ?format,
        "Configuration loaded"
    );

    let mut store = DashboardStore::seeded(config.id_generator());
    let stdout = io::stdout().lock();
    let mut shell = Shell::new(&mut store, stdout, format);

    match cli.command {
        CliCommand::List => {
            shell.execute(Command::List)?;
        }
        CliCommand::Search { term } => {
            shell.execute(Command::Search {
                term: term.join(" "),
            })?;
        }
        CliCommand::Presets { group } => {
            shell.execute(Command::Presets { group })?;
        }
        CliCommand::Shell { script: Some(path) } => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            shell.run(BufReader::new(file), None)?;
        }
        CliCommand::Shell { script: None } => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal().then_some(config.prompt.as_str());
            shell.run(stdin.lock(), prompt)?;
        }
    }

    Ok(())
}

/// Initializes the logging subsystem.
///
/// Logs go to stderr so stdout carries only command output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}
