//! JSON output formatter

use super::{FormatOptions, OutputFormatter};
use anyhow::Result;
use bitext_core::{Alignment, Group, MatrixSummary, RepairWindow};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - one object per pair, an array when several pairs share
/// the stream
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    records: Vec<serde_json::Value>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct AlignmentRecord<'a> {
    /// Pair name
    pub name: &'a str,
    /// Summary counts
    pub summary: MatrixSummary,
    /// Aligned groups in order
    pub groups: &'a [Group],
    /// Window used for each aligned group
    pub repairs: &'a [RepairWindow],
    /// Forward grouping, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<&'a [Group]>,
    /// Backward grouping, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backward: Option<&'a [Group]>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            records: Vec::new(),
        }
    }

    fn write_value(&mut self, value: &serde_json::Value) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_alignment(&mut self, name: &str, alignment: &Alignment) -> Result<()> {
        let groupings = self.options.include_groupings;
        let record = AlignmentRecord {
            name,
            summary: alignment.matrix.summary(),
            groups: alignment.matrix.groups(),
            repairs: &alignment.repairs,
            forward: groupings.then_some(alignment.forward.as_slice()),
            backward: groupings.then_some(alignment.backward.as_slice()),
        };
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let value = if self.options.multi {
            serde_json::Value::Array(std::mem::take(&mut self.records))
        } else {
            match self.records.pop() {
                Some(record) => record,
                None => return Ok(()),
            }
        };

        self.write_value(&value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
