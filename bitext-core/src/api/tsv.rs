//! Tab-separated matrix files
//!
//! ```text
//! original	translation
//! 1,2	10
//! 3
//! 	11
//! ```
//!
//! One line per group, ids of each side joined with `,`. An empty field is
//! an empty side.

use crate::types::{Group, SentenceId, Side};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Header line of every matrix file
pub const HEADER: &str = "original\ttranslation";

/// Errors while reading a matrix file
#[derive(Debug, Error)]
pub enum TsvError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file has no header line
    #[error("missing header line")]
    MissingHeader,

    /// The header line is not `original<TAB>translation`
    #[error("line 1: unexpected header {found:?}")]
    BadHeader {
        /// Header as found
        found: String,
    },

    /// A line without exactly two columns
    #[error("line {line}: expected 2 columns, found {found}")]
    ColumnCount {
        /// 1-based line number
        line: usize,
        /// Number of columns found
        found: usize,
    },

    /// An id that is not an unsigned integer
    #[error("line {line}: invalid {side} id {value:?}")]
    BadId {
        /// 1-based line number
        line: usize,
        /// Column the id is in
        side: Side,
        /// Text that failed to parse
        value: String,
    },

    /// A line with both sides empty
    #[error("line {line}: group has no sentences")]
    EmptyGroup {
        /// 1-based line number
        line: usize,
    },
}

/// Write groups with header
pub fn write_groups<W: Write>(mut writer: W, groups: &[Group]) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for group in groups {
        writeln!(writer, "{}", format_line(group))?;
    }
    writer.flush()
}

/// Render groups as a TSV string
pub fn to_tsv_string(groups: &[Group]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + groups.len() * 8);
    out.push_str(HEADER);
    out.push('\n');
    for group in groups {
        out.push_str(&format_line(group));
        out.push('\n');
    }
    out
}

/// Read groups written by [`write_groups`]
pub fn read_groups<R: BufRead>(reader: R) -> Result<Vec<Group>, TsvError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(TsvError::MissingHeader)??;
    if header.trim_end_matches('\r') != HEADER {
        return Err(TsvError::BadHeader { found: header });
    }

    let mut groups = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        let line_number = index + 2;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != 2 {
            return Err(TsvError::ColumnCount {
                line: line_number,
                found: columns.len(),
            });
        }

        let group = Group::new(
            parse_ids(columns[0], Side::Original, line_number)?,
            parse_ids(columns[1], Side::Translation, line_number)?,
        );
        if group.is_empty() {
            return Err(TsvError::EmptyGroup { line: line_number });
        }
        groups.push(group);
    }

    Ok(groups)
}

/// Parse groups from a TSV string
pub fn parse_tsv(input: &str) -> Result<Vec<Group>, TsvError> {
    read_groups(input.as_bytes())
}

fn format_line(group: &Group) -> String {
    format!(
        "{}\t{}",
        join_ids(&group.original),
        join_ids(&group.translation)
    )
}

fn join_ids(ids: &[SentenceId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_ids(field: &str, side: Side, line: usize) -> Result<Vec<SentenceId>, TsvError> {
    if field.trim().is_empty() {
        return Ok(Vec::new());
    }

    field
        .split(',')
        .map(|value| {
            value.parse().map_err(|_| TsvError::BadId {
                line,
                side,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<SentenceId> {
        raw.iter().copied().map(SentenceId).collect()
    }

    #[test]
    fn test_write_format() {
        let groups = vec![
            Group::new(ids(&[1, 2]), ids(&[10])),
            Group::new(ids(&[3]), vec![]),
            Group::new(vec![], ids(&[11])),
        ];

        assert_eq!(
            to_tsv_string(&groups),
            "original\ttranslation\n1,2\t10\n3\t\n\t11\n"
        );
    }

    #[test]
    fn test_string_matches_writer_output() {
        let groups = vec![
            Group::new(ids(&[1]), ids(&[10, 11])),
            Group::new(vec![], ids(&[12])),
        ];

        let mut buffer = Vec::new();
        write_groups(&mut buffer, &groups).unwrap();
        assert_eq!(to_tsv_string(&groups).as_bytes(), buffer.as_slice());
        assert_eq!(to_tsv_string(&[]), "original\ttranslation\n");
    }

    #[test]
    fn test_read_written_matrix() {
        let input = "original\ttranslation\n1,2\t10,11\n3\t\n\t12\n";
        let groups = parse_tsv(input).unwrap();

        assert_eq!(
            groups,
            vec![
                Group::new(ids(&[1, 2]), ids(&[10, 11])),
                Group::new(ids(&[3]), vec![]),
                Group::new(vec![], ids(&[12])),
            ]
        );
    }

    #[test]
    fn test_read_tolerates_crlf_and_blank_lines() {
        let input = "original\ttranslation\r\n1\t10\r\n\r\n2\t11\r\n";
        let groups = parse_tsv(input).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(parse_tsv(""), Err(TsvError::MissingHeader)));
    }

    #[test]
    fn test_bad_header() {
        let err = parse_tsv("translation\toriginal\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: unexpected header \"translation\\toriginal\""
        );
    }

    #[test]
    fn test_bad_id_reports_line() {
        let err = parse_tsv("original\ttranslation\n1\t10\n2\tx\n").unwrap_err();
        match err {
            TsvError::BadId { line, side, value } => {
                assert_eq!(line, 3);
                assert_eq!(side, Side::Translation);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_column_count() {
        let err = parse_tsv("original\ttranslation\n1\t10\t11\n").unwrap_err();
        assert!(matches!(err, TsvError::ColumnCount { line: 2, found: 3 }));
    }

    #[test]
    fn test_empty_group_rejected() {
        let err = parse_tsv("original\ttranslation\n\t\n").unwrap_err();
        assert!(matches!(err, TsvError::EmptyGroup { line: 2 }));
    }
}
