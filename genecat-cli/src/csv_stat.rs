use std::io;
use std::io::Write;

use serde::Serialize;

/// Statistics output in CSV format; the header row is derived from the
/// field names of the first serialized record.
#[derive(Debug)]
pub(crate) struct CsvStatOutput<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvStatOutput<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }
}

impl<W: Write> CsvStatOutput<W> {
    #[must_use]
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn add_record<S: Serialize>(&mut self, record: &S) -> anyhow::Result<()> {
        self.writer.serialize(record)?;

        anyhow::Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;

        anyhow::Ok(())
    }
}
