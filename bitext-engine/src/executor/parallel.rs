//! Parallel execution strategy

use crate::{
    batch::PairOutcome,
    error::{EngineError, Result},
    executor::{align_pair, ExecutionMode, Executor, Progress},
};
use bitext_core::{Blacklist, TextPair};
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Pairs are independent, so each one is a rayon task. Outcomes keep the
/// input order.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
    fail_fast: bool,
}

impl ParallelExecutor {
    /// Create a parallel executor; `None` uses the global rayon pool
    pub fn new(threads: Option<usize>, fail_fast: bool) -> Self {
        Self { threads, fail_fast }
    }

    fn run(
        &self,
        pairs: &[TextPair],
        blacklist: &Blacklist,
        progress: &Progress<'_>,
    ) -> Result<Vec<PairOutcome>> {
        pairs
            .par_iter()
            .map(|pair| {
                let outcome = align_pair(pair, blacklist);
                progress(&outcome);

                match &outcome.result {
                    Err(err) if self.fail_fast => {
                        Err(EngineError::alignment(outcome.name.clone(), err.clone()))
                    }
                    _ => Ok(outcome),
                }
            })
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        pairs: &[TextPair],
        blacklist: &Blacklist,
        progress: &Progress<'_>,
    ) -> Result<Vec<PairOutcome>> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                pool.install(|| self.run(pairs, blacklist, progress))
            }
            None => self.run(pairs, blacklist, progress),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
