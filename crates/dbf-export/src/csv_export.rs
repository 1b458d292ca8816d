//! CSV export.
//!
//! One header row of column names followed by one row per record. Empty
//! non-character values become empty cells.

use std::io::{Read, Seek, Write};

use dbf_core::{DbfTable, field_bytes, is_deleted};
use encoding_rs::Encoding;
use tracing::{debug, info};

use crate::encoding::table_encoding;
use crate::error::Result;
use crate::summary::ExportSummary;
use crate::value::{TrimMode, render_field};

/// Options for CSV export.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Write records flagged as deleted (default: false).
    pub include_deleted: bool,
    /// Trimming applied to character fields (default: both sides).
    pub trim: TrimMode,
    /// Code page override; the language driver decides when `None`.
    pub encoding: Option<&'static Encoding>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_deleted: false,
            trim: TrimMode::Both,
            encoding: None,
        }
    }
}

impl CsvOptions {
    /// Create CSV options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// Writes a table as CSV.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    options: CsvOptions,
}

impl CsvExporter {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Export every record of `table` to `writer`.
    ///
    /// Reading starts at the first record regardless of the table's cursor
    /// and leaves the table exhausted.
    ///
    /// # Errors
    /// Propagates table read errors and CSV/I/O write errors.
    pub fn export<R, W>(&self, table: &mut DbfTable<R>, writer: W) -> Result<ExportSummary>
    where
        R: Read + Seek,
        W: Write,
    {
        let encoding = table_encoding(table, self.options.encoding);
        debug!(
            encoding = encoding.name(),
            delimiter = %char::from(self.options.delimiter),
            "writing CSV"
        );

        let mut out = csv::WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .from_writer(writer);
        out.write_record(table.fields().iter().map(|field| field.name.as_str()))?;

        let mut summary = ExportSummary::default();
        let mut buf = Vec::new();
        let mut row: Vec<String> = Vec::with_capacity(table.column_count());
        table.rewind();
        while table.read_next_into(&mut buf)?.is_some() {
            if !self.options.include_deleted && is_deleted(&buf) {
                summary.skipped_deleted += 1;
                continue;
            }
            row.clear();
            for field in table.fields() {
                let bytes = field_bytes(&buf, field).unwrap_or_default();
                row.push(
                    render_field(bytes, field, self.options.trim, encoding).unwrap_or_default(),
                );
            }
            out.write_record(&row)?;
            summary.written += 1;
        }
        out.flush()?;

        info!(
            written = summary.written,
            skipped_deleted = summary.skipped_deleted,
            "CSV export complete"
        );
        Ok(summary)
    }
}
