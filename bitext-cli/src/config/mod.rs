//! Configuration module

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use bitext_core::Blacklist;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Alignment configuration
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Parse TOML configuration text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Alignment-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct AlignmentConfig {
    /// Sentence ids ignored in every pair
    #[serde(default)]
    pub blacklist: Blacklist,
}

impl AlignmentConfig {
    /// Configured blacklist extended with command line ids and an
    /// optional blacklist file
    pub fn resolve_blacklist(&self, ids: &[u64], file: Option<&Path>) -> Result<Blacklist> {
        let mut blacklist = self.blacklist.clone();
        blacklist.extend(ids.iter().copied());

        if let Some(path) = file {
            blacklist.merge(&FileReader::read_blacklist(path)?);
        }

        if !blacklist.is_empty() {
            log::info!("{} blacklisted sentence ids", blacklist.len());
        }
        Ok(blacklist)
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Write forward and backward groupings next to each matrix
    pub dump_groupings: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "tsv".to_string(),
            pretty_json: true,
            dump_groupings: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Minimum number of text pairs for parallel processing
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 8,
            worker_threads: 0,
        }
    }
}

impl PerformanceConfig {
    /// Worker threads with 0 resolved to the number of CPUs
    pub fn resolved_threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
