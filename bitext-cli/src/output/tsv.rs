//! TSV output formatter

use super::OutputFormatter;
use anyhow::Result;
use bitext_core::{tsv, Alignment};
use std::io::Write;

/// TSV formatter - writes the matrix file format
///
/// When several pairs share one stream each matrix is preceded by a
/// `# name` line.
pub struct TsvFormatter<W: Write> {
    writer: W,
    multi: bool,
    written: usize,
}

impl<W: Write> TsvFormatter<W> {
    /// Create a new TSV formatter
    pub fn new(writer: W, multi: bool) -> Self {
        Self {
            writer,
            multi,
            written: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TsvFormatter<W> {
    fn format_alignment(&mut self, name: &str, alignment: &Alignment) -> Result<()> {
        if self.multi {
            if self.written > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "# {name}")?;
        }
        tsv::write_groups(&mut self.writer, alignment.matrix.groups())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
