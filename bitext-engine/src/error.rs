//! Engine error types

use bitext_core::AlignmentError;
use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A text pair could not be aligned
    #[error("alignment of {pair} failed: {source}")]
    Alignment {
        /// Name of the failing pair
        pair: String,
        /// Error raised by the reconciler
        #[source]
        source: AlignmentError,
    },

    /// Reading an input file failed
    #[error("cannot read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// An input file is not a valid text pair document
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A blacklist file contains something other than ids
    #[error("{path}:{line}: invalid sentence id {value:?}")]
    BadBlacklistEntry {
        /// Blacklist file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// Wrap a reconciler error with the name of its pair
    pub fn alignment(pair: impl Into<String>, source: AlignmentError) -> Self {
        EngineError::Alignment {
            pair: pair.into(),
            source,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
