//! Execution strategies for batches of text pairs

use crate::batch::PairOutcome;
use crate::error::Result;
use bitext_core::{Blacklist, TextPair};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Callback invoked once per finished pair
pub type Progress<'a> = dyn Fn(&PairOutcome) + Sync + 'a;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One pair after another on the calling thread
    Sequential,
    /// Pairs spread over a thread pool
    Parallel,
    /// Choose by batch size
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Align every pair and return outcomes in input order
    fn execute(
        &self,
        pairs: &[TextPair],
        blacklist: &Blacklist,
        progress: &Progress<'_>,
    ) -> Result<Vec<PairOutcome>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on the number of pairs
pub fn auto_select(pair_count: usize, threshold: usize) -> ExecutionMode {
    if pair_count < 2 || pair_count < threshold {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

/// Align one pair and log how it went
pub(crate) fn align_pair(pair: &TextPair, blacklist: &Blacklist) -> PairOutcome {
    let name = pair.name();
    log::info!(
        "aligning {name} ({} / {} sentences)",
        pair.original.len(),
        pair.translation.len()
    );

    let result = pair.align(blacklist);
    match &result {
        Ok(alignment) => log::info!("{name}: {} groups", alignment.matrix.len()),
        Err(err) => log::error!("{name}: {err}"),
    }

    PairOutcome { name, result }
}
