//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum number of text pairs for parallel processing
    pub parallel_threshold: usize,
    /// Stop at the first pair that fails
    pub fail_fast: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 8,
            fail_fast: false,
        }
    }
}

impl EngineConfig {
    /// Create a builder starting from the default configuration
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            fail_fast: false,
        }
    }

    /// Parallel even for small batches
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None, // Use all available
            parallel_threshold: 2,
            fail_fast: false,
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Stop at the first failing pair, one pair at a time
    pub fn strict() -> Self {
        Self {
            fail_fast: true,
            ..Self::sequential()
        }
    }

    /// Check the configuration for impossible values
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(EngineError::ConfigError(
                "parallel threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the parallel threshold in text pairs
    pub fn parallel_threshold(mut self, pairs: usize) -> Self {
        self.config.parallel_threshold = pairs;
        self
    }

    /// Stop at the first failing pair
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.config.fail_fast = enabled;
        self
    }

    /// Use sequential configuration preset
    pub fn sequential(mut self) -> Self {
        self.config = EngineConfig::sequential();
        self
    }

    /// Use fast configuration preset
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig::fast();
        self
    }

    /// Use balanced configuration preset
    pub fn balanced(mut self) -> Self {
        self.config = EngineConfig::balanced();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
