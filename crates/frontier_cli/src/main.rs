//! Frontier CLI - Command Line Access to the Two-Asset Efficient Frontier
//!
//! # Commands
//!
//! - `frontier compute` - Evaluate the frontier, allocation point and axis bounds
//! - `frontier normalize <field> <raw>` - Normalise one typed input value
//! - `frontier session [--script <file>]` - Replay user events against a live session
//!
//! # Configuration
//!
//! Settings are layered: command-line flags, then `FRONTIER_*` environment
//! variables, then `frontier.toml`, then built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use frontier_core::store::ParameterUpdate;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

/// Two-asset efficient frontier CLI
#[derive(Parser)]
#[command(name = "frontier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./frontier.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Decimal places for printed numbers
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the frontier for the given parameters
    Compute {
        /// Correlation between the two assets, in [-1, 1]
        #[arg(long, allow_hyphen_values = true)]
        correlation: Option<f64>,

        /// Expected return of asset A
        #[arg(long, allow_hyphen_values = true)]
        expected_return_a: Option<f64>,

        /// Expected return of asset B
        #[arg(long, allow_hyphen_values = true)]
        expected_return_b: Option<f64>,

        /// Standard deviation of asset A
        #[arg(long, allow_hyphen_values = true)]
        std_dev_a: Option<f64>,

        /// Standard deviation of asset B
        #[arg(long, allow_hyphen_values = true)]
        std_dev_b: Option<f64>,

        /// Share of the portfolio held in asset A
        #[arg(long, allow_hyphen_values = true)]
        share_a: Option<f64>,
    },

    /// Normalise a typed value the way an input field would
    Normalize {
        /// Field name (expectedReturnA, expectedReturnB, stdDevA, stdDevB, shareA)
        field: String,

        /// Raw text as typed
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },

    /// Replay a script of user events, one per line (stdin when no script)
    Session {
        /// Path to the script file
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::build_config(&config::CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
        precision: cli.precision,
        verbose: cli.verbose,
    })?;

    // Initialise tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::default().add_directive(LevelFilter::from_level(config.log_level).into())
        }))
        .init();

    debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    match cli.command {
        Commands::Compute {
            correlation,
            expected_return_a,
            expected_return_b,
            std_dev_a,
            std_dev_b,
            share_a,
        } => {
            let update = ParameterUpdate {
                correlation,
                expected_return_a,
                expected_return_b,
                std_dev_a,
                std_dev_b,
                share_a,
            };
            commands::compute::run(&mut stdout.lock(), &update, &config)
        }
        Commands::Normalize { field, raw } => {
            commands::normalize::run(&mut stdout.lock(), &field, &raw, &config)
        }
        Commands::Session { script } => commands::session::run(script.as_deref(), &config),
    }
}
