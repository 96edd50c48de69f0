//! Batch alignment of many text pairs

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
use crate::executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
use bitext_core::{Alignment, AlignmentError, Blacklist, Matrix, TextPair};
use std::time::{Duration, Instant};

/// Result of aligning one pair of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    /// Pair name, used for output files
    pub name: String,
    /// Alignment or the reconciler error
    pub result: std::result::Result<Alignment, AlignmentError>,
}

impl PairOutcome {
    /// Whether the pair aligned
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Matrix of a successful pair
    pub fn matrix(&self) -> Option<&Matrix> {
        self.result.as_ref().ok().map(|alignment| &alignment.matrix)
    }

    /// Error of a failed pair
    pub fn error(&self) -> Option<&AlignmentError> {
        self.result.as_ref().err()
    }
}

/// Outcome of a whole batch
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One outcome per input pair, in input order
    pub outcomes: Vec<PairOutcome>,
    /// Execution mode that was actually used
    pub mode: ExecutionMode,
    /// Wall-clock time for the batch
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of pairs that aligned
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of pairs that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every pair aligned
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(PairOutcome::is_success)
    }

    /// Failed pairs with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&str, &AlignmentError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error().map(|err| (o.name.as_str(), err)))
    }
}

/// Aligns batches of text pairs with a shared blacklist
#[derive(Debug, Clone, Default)]
pub struct BatchAligner {
    config: EngineConfig,
    blacklist: Blacklist,
}

impl BatchAligner {
    /// Create an aligner with a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            blacklist: Blacklist::new(),
        })
    }

    /// Set the blacklist applied to every pair on top of its own
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared blacklist
    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Align a single pair
    pub fn align_one(&self, pair: &TextPair) -> Result<Alignment> {
        pair.align(&self.blacklist)
            .map_err(|err| EngineError::alignment(pair.name(), err))
    }

    /// Align every pair
    pub fn align(&self, pairs: &[TextPair]) -> Result<BatchReport> {
        self.align_with_progress(pairs, |_| {})
    }

    /// Align every pair, calling `progress` as each one finishes
    ///
    /// With fail-fast the first failure is returned as an error and no
    /// report is produced.
    pub fn align_with_progress<F>(&self, pairs: &[TextPair], progress: F) -> Result<BatchReport>
    where
        F: Fn(&PairOutcome) + Sync,
    {
        let start = Instant::now();
        let mode = self.select_mode(pairs.len());
        log::debug!("aligning {} pairs in {mode} mode", pairs.len());

        let outcomes = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => ParallelExecutor::new(self.config.threads, self.config.fail_fast)
                .execute(pairs, &self.blacklist, &progress)?,
            _ => SequentialExecutor::new(self.config.fail_fast).execute(
                pairs,
                &self.blacklist,
                &progress,
            )?,
        };

        let report = BatchReport {
            outcomes,
            mode,
            elapsed: start.elapsed(),
        };
        log::info!(
            "{} of {} pairs aligned in {:.2?}",
            report.succeeded(),
            pairs.len(),
            report.elapsed
        );
        Ok(report)
    }

    /// Resolve the configured mode for a batch of `pair_count` pairs
    pub fn select_mode(&self, pair_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(pair_count, self.config.parallel_threshold),
            ExecutionMode::Parallel if cfg!(feature = "parallel") => ExecutionMode::Parallel,
            ExecutionMode::Parallel => {
                log::warn!("built without parallel support, running sequentially");
                ExecutionMode::Sequential
            }
            ExecutionMode::Sequential => ExecutionMode::Sequential,
        }
    }
}
