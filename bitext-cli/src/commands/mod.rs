//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use bitext_core::AlignmentError;
use bitext_engine::ExecutionMode;
use clap::Subcommand;

pub mod align;
pub mod check;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align text pairs and write their matrices
    Align(align::AlignArgs),

    /// Check a matrix file against its text pair
    Check(check::CheckArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List execution modes
    Modes,

    /// List the ways a single pair can fail to align
    Errors,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Align(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::all() {
                    println!("  {:<6} {}", format.extension(), format.description());
                }
            }
            ListCommands::Modes => {
                println!("Available execution modes:");
                for (mode, description) in [
                    (ExecutionMode::Sequential, "one pair after another"),
                    (ExecutionMode::Parallel, "pairs spread over worker threads"),
                    (ExecutionMode::Adaptive, "parallel once the batch reaches the threshold"),
                ] {
                    println!("  {mode:<10} {description}");
                }
            }
            ListCommands::Errors => {
                println!("Alignment error kinds:");
                for (kind, description) in AlignmentError::KINDS {
                    println!("  {kind:<26} {description}");
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Already initialized when several commands run in one test binary
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
