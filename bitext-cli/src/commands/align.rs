//! Align command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use bitext_core::{tsv, Alignment, Blacklist, Group};
use bitext_engine::{BatchAligner, BatchReport, EngineConfig, ExecutionMode};
use clap::{Args, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the align command
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// Text pair files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output directory, one file per pair (default: stdout)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, otherwise tsv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Sentence ids to ignore in every pair
    #[arg(short, long, value_name = "ID", value_delimiter = ',')]
    pub blacklist: Vec<u64>,

    /// File with sentence ids to ignore in every pair
    #[arg(long, value_name = "FILE")]
    pub blacklist_file: Option<PathBuf>,

    /// Also write the forward and backward groupings
    #[arg(long)]
    pub dump_groupings: bool,

    /// Force parallel processing even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Stop at the first pair that cannot be aligned
    #[arg(long)]
    pub fail_fast: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "BITEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting alignment");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        let blacklist = self.resolve_blacklist(&config)?;
        let aligner = BatchAligner::new(self.engine_config(&config)?)?.with_blacklist(blacklist);

        let files = resolve_patterns(&self.input)?;
        let pairs = files
            .iter()
            .map(|path| FileReader::read_pair(path))
            .collect::<Result<Vec<_>>>()?;
        log::info!("Loaded {} text pairs", pairs.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_pairs(pairs.len() as u64);
        let report = aligner.align_with_progress(&pairs, |outcome| {
            progress.pair_completed(&outcome.name, outcome.is_success())
        })?;
        progress.finish();

        let options = FormatOptions {
            multi: pairs.len() > 1,
            pretty_json: config.output.pretty_json,
            include_groupings: self.dump_groupings || config.output.dump_groupings,
        };
        match &self.output {
            Some(dir) => write_files(dir, &report, format, options)?,
            None => write_stdout(&report, format, options)?,
        }

        for (name, err) in report.failures() {
            eprintln!("✗ {name}: {err}");
        }
        if !self.quiet {
            eprintln!(
                "Aligned {} of {} pairs in {:.2?} ({} mode)",
                report.succeeded(),
                report.outcomes.len(),
                report.elapsed,
                report.mode
            );
        }

        if report.failed() > 0 {
            return Err(CliError::PairsFailed {
                failed: report.failed(),
                total: report.outcomes.len(),
            }
            .into());
        }
        Ok(())
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                anyhow::Error::from(CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                )))
            }),
        }
    }

    fn resolve_blacklist(&self, config: &CliConfig) -> Result<Blacklist> {
        config
            .alignment
            .resolve_blacklist(&self.blacklist, self.blacklist_file.as_deref())
    }

    fn engine_config(&self, config: &CliConfig) -> Result<EngineConfig> {
        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };
        let threads = self
            .threads
            .unwrap_or_else(|| config.performance.resolved_threads());

        let engine_config = EngineConfig::builder()
            .execution_mode(mode)
            .threads(Some(threads))
            .parallel_threshold(config.performance.parallel_threshold)
            .fail_fast(self.fail_fast)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(engine_config)
    }
}

/// Write one file per aligned pair into `dir`
fn write_files(
    dir: &Path,
    report: &BatchReport,
    format: OutputFormat,
    options: FormatOptions,
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let options = FormatOptions {
        multi: false,
        ..options
    };
    for outcome in &report.outcomes {
        let Ok(alignment) = &outcome.result else {
            continue;
        };

        let path = dir.join(format!("{}.{}", outcome.name, format.extension()));
        write_alignment_file(&path, &outcome.name, alignment, format, options)?;

        if options.include_groupings {
            write_grouping(dir, &outcome.name, "forward", &alignment.forward)?;
            write_grouping(dir, &outcome.name, "backward", &alignment.backward)?;
        }
    }

    Ok(())
}

fn write_alignment_file(
    path: &Path,
    name: &str,
    alignment: &Alignment,
    format: OutputFormat,
    options: FormatOptions,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let mut formatter = create_formatter(format, Box::new(BufWriter::new(file)), options);
    formatter.format_alignment(name, alignment)?;
    formatter.finish()?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

fn write_grouping(dir: &Path, name: &str, kind: &str, groups: &[Group]) -> Result<()> {
    let path = dir.join(format!("{name}-{kind}.tsv"));
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    tsv::write_groups(BufWriter::new(file), groups)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

/// Write every aligned pair to stdout
fn write_stdout(report: &BatchReport, format: OutputFormat, options: FormatOptions) -> Result<()> {
    if options.include_groupings && format != OutputFormat::Json {
        log::warn!("groupings are only written with --output or the JSON format");
    }

    let stdout = io::stdout();
    let mut formatter = create_formatter(format, Box::new(stdout.lock()), options);
    for outcome in &report.outcomes {
        if let Ok(alignment) = &outcome.result {
            formatter.format_alignment(&outcome.name, alignment)?;
        }
    }
    formatter.finish()
}
