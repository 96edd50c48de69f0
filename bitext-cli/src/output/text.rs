//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use bitext_core::Alignment;
use std::io::Write;

/// Plain text formatter - numbered groups followed by summary counts
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_alignment(&mut self, name: &str, alignment: &Alignment) -> Result<()> {
        writeln!(self.writer, "{name}")?;
        for (i, group) in alignment.matrix.iter().enumerate() {
            writeln!(self.writer, "{:>6}  {group}", i + 1)?;
        }

        let summary = alignment.matrix.summary();
        writeln!(
            self.writer,
            "{} groups: {} one-to-one, {} merged, {} unaligned original, {} unaligned translation",
            summary.groups,
            summary.one_to_one,
            summary.merged,
            summary.unaligned_originals,
            summary.unaligned_translations
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
