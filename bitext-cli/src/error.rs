//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the input patterns
    NoInput(Vec<String>),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Some pairs of a batch could not be aligned
    PairsFailed {
        /// Number of failed pairs
        failed: usize,
        /// Number of pairs in the batch
        total: usize,
    },
    /// A matrix file does not match its text pair
    MatrixMismatch(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::PairsFailed { failed, total } => {
                write!(f, "{failed} of {total} text pairs could not be aligned")
            }
            CliError::MatrixMismatch(msg) => write!(f, "Matrix mismatch: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
