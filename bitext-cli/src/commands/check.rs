//! Check command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use bitext_core::{check_matrix, Group};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Text pair file the matrix was computed from
    #[arg(short, long, value_name = "FILE", required = true)]
    pub pair: PathBuf,

    /// Matrix file to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub matrix: PathBuf,

    /// Also align the pair again and compare the groups
    #[arg(short, long)]
    pub recompute: bool,

    /// Sentence ids to ignore when recomputing
    #[arg(short, long, value_name = "ID", value_delimiter = ',')]
    pub blacklist: Vec<u64>,

    /// File with sentence ids to ignore when recomputing
    #[arg(long, value_name = "FILE")]
    pub blacklist_file: Option<PathBuf>,

    /// Configuration file (its blacklist applies when recomputing)
    #[arg(short, long, value_name = "FILE", env = "BITEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let pair = FileReader::read_pair(&self.pair)?;
        let groups = FileReader::read_matrix(&self.matrix)?;
        println!(
            "Checking matrix: {} against {}",
            self.matrix.display(),
            pair.name()
        );

        let matrix = match check_matrix(&pair.original, &pair.translation, groups) {
            Ok(matrix) => matrix,
            Err(e) => {
                println!("✗ Matrix is invalid!");
                println!("  Error: {e}");
                return Err(CliError::MatrixMismatch(e.to_string()).into());
            }
        };

        let summary = matrix.summary();
        println!("✓ Matrix covers both texts in order!");
        println!(
            "  Sentences: {} original, {} translation",
            pair.original.len(),
            pair.translation.len()
        );
        println!(
            "  Groups: {} ({} one-to-one, {} merged, {} unaligned)",
            summary.groups,
            summary.one_to_one,
            summary.merged,
            summary.groups - summary.one_to_one - summary.merged
        );

        if self.recompute {
            let config = CliConfig::load_or_default(self.config.as_deref())?;
            let extra = config
                .alignment
                .resolve_blacklist(&self.blacklist, self.blacklist_file.as_deref())?;
            let fresh = pair.align(&extra)?;

            match first_difference(matrix.groups(), fresh.matrix.groups()) {
                None => println!("✓ Matrix matches a fresh alignment"),
                Some(index) => {
                    println!("✗ Matrix differs from a fresh alignment at group {}", index + 1);
                    return Err(CliError::MatrixMismatch(format!(
                        "group {} differs from a fresh alignment",
                        index + 1
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Index of the first group that differs, including a length difference
fn first_difference(stored: &[Group], fresh: &[Group]) -> Option<usize> {
    stored
        .iter()
        .zip(fresh)
        .position(|(a, b)| a != b)
        .or_else(|| (stored.len() != fresh.len()).then(|| stored.len().min(fresh.len())))
}
