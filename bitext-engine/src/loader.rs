//! Reading text pairs and blacklists from disk

use crate::error::{EngineError, Result};
use bitext_core::{Blacklist, SentenceId, TextPair};
use std::fs;
use std::path::Path;

/// Parse a text pair document
pub fn parse_pair(input: &str) -> serde_json::Result<TextPair> {
    serde_json::from_str(input)
}

/// Load a text pair from a JSON file
pub fn load_pair(path: &Path) -> Result<TextPair> {
    let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pair = parse_pair(&content).map_err(|source| EngineError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} from {}: {} / {} sentences",
        pair.name(),
        path.display(),
        pair.original.len(),
        pair.translation.len()
    );
    Ok(pair)
}

/// Load several text pairs, stopping at the first unreadable file
pub fn load_pairs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<TextPair>> {
    paths.iter().map(|path| load_pair(path.as_ref())).collect()
}

/// Read a blacklist file
///
/// Ids are separated by whitespace or commas; `#` starts a comment that
/// runs to the end of the line.
pub fn read_blacklist(path: &Path) -> Result<Blacklist> {
    let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut blacklist = Blacklist::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for value in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|v| !v.is_empty())
        {
            let id: SentenceId = value.parse().map_err(|_| EngineError::BadBlacklistEntry {
                path: path.to_path_buf(),
                line: index + 1,
                value: value.to_string(),
            })?;
            blacklist.extend([id]);
        }
    }

    Ok(blacklist)
}
