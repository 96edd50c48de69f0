//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add known-bad sentence ids to [alignment] blacklist");
        println!("2. Use it for alignment:");
        println!(
            "   bitext align -i 'pairs/*.json' -o matrices --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        format!(
            r#"# Bitext alignment configuration

[alignment]
# Sentence ids ignored in every text pair (lacunae, doubtful passages).
# Their links are dropped and they come out as unaligned groups.
blacklist = []

[output]
# Format used when --format is not given: "tsv", "json" or "text"
default_format = "tsv"

# Indent JSON output
pretty_json = true

# Write <name>-forward.tsv and <name>-backward.tsv next to each matrix
dump_groupings = false

[performance]
# Batches with at least this many text pairs are aligned in parallel
parallel_threshold = 8

# Number of worker threads (0 = number of CPUs, {} on this machine)
worker_threads = 0
"#,
            num_cpus::get()
        )
    }
}
