//! Record reading.
//!
//! Records are fixed length and start right after the header, so record
//! `i` lives at `header_length + i * record_length`. Sequential reads walk a
//! cursor forward; indexed reads leave it alone.

use std::io::{Read, Seek, SeekFrom};

use tracing::trace;

use crate::error::{DbfError, Result};
use crate::stream::read_fully;
use crate::table::DbfTable;
use crate::types::{DbfRecord, field_bytes};

impl<R: Read + Seek> DbfTable<R> {
    /// Read the record after the cursor.
    ///
    /// Returns `Ok(None)` once every record has been read; no I/O happens in
    /// that case.
    ///
    /// # Errors
    /// `TruncatedInput` if the stream ends inside the record (the cursor
    /// does not move), `Io` on seek or read failure.
    pub fn read_next(&mut self) -> Result<Option<DbfRecord>> {
        let mut buf = Vec::new();
        Ok(self
            .read_next_into(&mut buf)?
            .map(|index| DbfRecord::new(index, buf)))
    }

    /// Read the record after the cursor into a caller-owned buffer.
    ///
    /// The buffer is resized to the record length. Returns the record index,
    /// or `None` at the end of the table.
    ///
    /// # Errors
    /// See [`DbfTable::read_next`].
    pub fn read_next_into(&mut self, buf: &mut Vec<u8>) -> Result<Option<u64>> {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        if next >= u64::from(self.header.record_count) {
            return Ok(None);
        }
        self.read_into(next, buf)?;
        self.cursor = Some(next);
        Ok(Some(next))
    }

    /// Read record `index` without moving the cursor.
    ///
    /// # Errors
    /// `RecordOutOfRange` for an index past the last record, otherwise see
    /// [`DbfTable::read_next`].
    pub fn read_record_at(&mut self, index: u64) -> Result<DbfRecord> {
        self.check_index(index)?;
        let mut buf = Vec::new();
        self.read_into(index, &mut buf)?;
        Ok(DbfRecord::new(index, buf))
    }

    /// Position the cursor so the next `read_next` returns record `index`.
    ///
    /// `index == row_count()` is allowed and leaves the table exhausted.
    ///
    /// # Errors
    /// `RecordOutOfRange` for an index past the end.
    pub fn seek_record(&mut self, index: u64) -> Result<()> {
        if index > u64::from(self.header.record_count) {
            return Err(DbfError::RecordOutOfRange {
                index,
                record_count: self.header.record_count,
            });
        }
        self.cursor = index.checked_sub(1);
        Ok(())
    }

    /// Move the cursor back before the first record.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    /// Iterate over the remaining records.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            table: self,
            failed: false,
        }
    }

    fn check_index(&self, index: u64) -> Result<()> {
        if index >= u64::from(self.header.record_count) {
            return Err(DbfError::RecordOutOfRange {
                index,
                record_count: self.header.record_count,
            });
        }
        Ok(())
    }

    fn read_into(&mut self, index: u64, buf: &mut Vec<u8>) -> Result<()> {
        let position = self.header.record_position(index);
        let len = usize::from(self.header.record_length);
        self.stream.seek(SeekFrom::Start(position))?;
        buf.clear();
        buf.resize(len, 0);
        let read = read_fully(&mut self.stream, buf)?;
        if read < len {
            return Err(DbfError::truncated("record", position, len, read));
        }
        trace!(index, position, "read record");
        Ok(())
    }
}

impl<R> DbfTable<R> {
    /// Bytes of `column` within `record`.
    #[must_use]
    pub fn field_bytes<'r>(&self, record: &'r DbfRecord, column: usize) -> Option<&'r [u8]> {
        let field = self.fields.get(column)?;
        field_bytes(record.as_bytes(), field)
    }
}

/// Iterator over the records after a table's cursor.
///
/// Stops after the first error.
pub struct Records<'a, R> {
    table: &'a mut DbfTable<R>,
    failed: bool,
}

impl<R: Read + Seek> Iterator for Records<'_, R> {
    type Item = Result<DbfRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.table.read_next() {
            Ok(record) => record.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
