use crate::core::Record;
use colored::*;
use std::io::Write;

/// Writes a ranked record sequence to its destination.
pub trait OutputWriter {
    fn write_ranking(&mut self, records: &[Record]) -> anyhow::Result<()>;
}

/// The human-readable terminal rendering: one `<id><TAB><score>` row per
/// record, highest score first, with a dim header and count footer.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_ranking(&mut self, records: &[Record]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "id\tscore".dimmed())?;
        for record in records {
            writeln!(self.writer, "{}\t{}", record.id, record.score)?;
        }
        let footer = format!(
            "{} record{}",
            records.len(),
            if records.len() == 1 { "" } else { "s" }
        );
        writeln!(self.writer, "{}", footer.dimmed())?;
        Ok(())
    }
}
