//! Sequential execution strategy

use crate::{
    batch::PairOutcome,
    error::{EngineError, Result},
    executor::{align_pair, ExecutionMode, Executor, Progress},
};
use bitext_core::{Blacklist, TextPair};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor {
    fail_fast: bool,
}

impl SequentialExecutor {
    /// Create a sequential executor
    pub fn new(fail_fast: bool) -> Self {
        Self { fail_fast }
    }
}

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        pairs: &[TextPair],
        blacklist: &Blacklist,
        progress: &Progress<'_>,
    ) -> Result<Vec<PairOutcome>> {
        let mut outcomes = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let outcome = align_pair(pair, blacklist);
            progress(&outcome);

            if self.fail_fast {
                if let Err(err) = &outcome.result {
                    return Err(EngineError::alignment(outcome.name, err.clone()));
                }
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
