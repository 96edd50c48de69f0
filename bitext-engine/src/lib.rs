//! Batch orchestration for bitext sentence alignment
//!
//! This crate loads text pairs, picks an execution strategy and runs the
//! core reconciler over every pair, collecting per-pair outcomes.

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod executor;
pub mod loader;

// Re-export key types
pub use batch::{BatchAligner, BatchReport, PairOutcome};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use loader::{load_pair, load_pairs, parse_pair, read_blacklist};

// Re-export from core for convenience
pub use bitext_core::{Alignment, AlignmentError, Blacklist, Matrix, TextPair};
