//! Output formatting module

use anyhow::Result;
use bitext_core::Alignment;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the alignment of one text pair
    fn format_alignment(&mut self, name: &str, alignment: &Alignment) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;
pub mod tsv;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use tsv::TsvFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated matrix, one group per line
    Tsv,
    /// JSON with groups, summary and repair windows
    Json,
    /// Human-readable listing with summary
    Text,
}

impl OutputFormat {
    /// File extension for per-pair output files
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    /// One-line description for `bitext list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tab-separated matrix (original<TAB>translation)",
            OutputFormat::Json => "JSON with groups, summary and repair windows",
            OutputFormat::Text => "human-readable listing with summary counts",
        }
    }

    /// All formats in listing order
    pub fn all() -> [OutputFormat; 3] {
        [OutputFormat::Tsv, OutputFormat::Json, OutputFormat::Text]
    }
}

/// Options shared by all formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Several pairs go to the same stream
    pub multi: bool,
    /// Pretty print JSON
    pub pretty_json: bool,
    /// Include forward and backward groupings where the format allows
    pub include_groupings: bool,
}

/// Create a formatter writing to `writer`
pub fn create_formatter<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Tsv => Box::new(TsvFormatter::new(writer, options.multi)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
    }
}
