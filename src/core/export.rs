//! CSV output.
//!
//! Writes entries in the column layout password-manager importers expect:
//! a fixed header, CRLF line endings, quotes only where needed.

use std::io::Write;

use crate::core::constants::FIELD_NAMES;
use crate::core::domain::Entry;
use crate::error::{ExportError, Result};

/// Streams entries as CSV rows
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvExporter<W> {
    /// Create an exporter and write the header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(inner);

        writer.write_record(FIELD_NAMES).map_err(ExportError::from)?;

        Ok(Self { writer, rows: 0 })
    }

    /// Write one entry.
    pub fn write(&mut self, entry: &Entry) -> Result<()> {
        self.writer.serialize(entry).map_err(ExportError::from)?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
