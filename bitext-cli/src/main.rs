//! Bitext command-line entry point

use anyhow::Result;
use bitext_cli::commands::Commands;
use clap::Parser;

/// Sentence alignment for bitexts with noisy sentence links
#[derive(Debug, Parser)]
#[command(name = "bitext", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
