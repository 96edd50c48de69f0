//! File reading utilities

use anyhow::{Context, Result};
use bitext_core::{tsv, Blacklist, Group, TextPair};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Readers for the files the CLI consumes
pub struct FileReader;

impl FileReader {
    /// Read a text pair document
    pub fn read_pair(path: &Path) -> Result<TextPair> {
        Ok(bitext_engine::load_pair(path)?)
    }

    /// Read a TSV matrix file
    pub fn read_matrix(path: &Path) -> Result<Vec<Group>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        tsv::read_groups(BufReader::new(file))
            .with_context(|| format!("Invalid matrix file: {}", path.display()))
    }

    /// Read a blacklist file
    pub fn read_blacklist(path: &Path) -> Result<Blacklist> {
        Ok(bitext_engine::read_blacklist(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitext_core::SentenceId;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_matrix_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("m.tsv");
        fs::write(&file_path, "original\ttranslation\n1,2\t10\n3\t\n").unwrap();

        let groups = FileReader::read_matrix(&file_path).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].original, vec![SentenceId(1), SentenceId(2)]);
        assert!(groups[1].translation.is_empty());
    }

    #[test]
    fn test_read_matrix_nonexistent_file() {
        let err = FileReader::read_matrix(Path::new("/nonexistent/m.tsv")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_matrix_reports_bad_line() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.tsv");
        fs::write(&file_path, "original\ttranslation\n1\tten\n").unwrap();

        let err = FileReader::read_matrix(&file_path).unwrap_err();
        assert!(err.to_string().contains("Invalid matrix file"));
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_read_pair_nonexistent_file() {
        let err = FileReader::read_pair(Path::new("/nonexistent/pair.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pair.json"));
    }
}
