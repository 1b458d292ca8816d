//! In-memory dBASE table fixtures.

#![allow(dead_code)]

use std::cell::Cell;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::rc::Rc;

/// Column definition for a fixture table.
pub struct Column {
    pub name: &'static str,
    pub type_code: u8,
    pub length: u8,
    pub decimals: u8,
}

pub fn column(name: &'static str, type_code: u8, length: u8) -> Column {
    Column {
        name,
        type_code,
        length,
        decimals: 0,
    }
}

/// Builds the bytes of a dBASE table.
pub struct TableBuilder {
    pub version: u8,
    pub last_update: [u8; 3],
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<u8>>,
    /// Overrides the computed record count.
    pub record_count: Option<u32>,
    /// Overrides the computed record length.
    pub record_length: Option<u16>,
}

impl TableBuilder {
    pub fn new(version: u8) -> Self {
        Self {
            version,
            last_update: [104, 3, 15],
            columns: Vec::new(),
            rows: Vec::new(),
            record_count: None,
            record_length: None,
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a record from raw field values; each is space-padded to its column width.
    ///
    /// Missing trailing values are left blank.
    pub fn row(mut self, deleted: bool, values: &[&[u8]]) -> Self {
        let mut record = vec![if deleted { b'*' } else { b' ' }];
        for (i, column) in self.columns.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or_default();
            let mut cell = vec![b' '; usize::from(column.length)];
            let len = value.len().min(cell.len());
            cell[..len].copy_from_slice(&value[..len]);
            record.extend_from_slice(&cell);
        }
        self.rows.push(record);
        self
    }

    pub fn header_length(&self) -> u16 {
        (32 + self.columns.len() * 32 + 1) as u16
    }

    pub fn record_length(&self) -> u16 {
        self.record_length.unwrap_or_else(|| {
            1 + self
                .columns
                .iter()
                .map(|c| u16::from(c.length))
                .sum::<u16>()
        })
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = vec![0u8; 32];
        data[0] = self.version;
        data[1..4].copy_from_slice(&self.last_update);
        let count = self.record_count.unwrap_or(self.rows.len() as u32);
        data[4..8].copy_from_slice(&count.to_le_bytes());
        data[8..10].copy_from_slice(&self.header_length().to_le_bytes());
        data[10..12].copy_from_slice(&self.record_length().to_le_bytes());
        for column in &self.columns {
            let mut descriptor = [0u8; 32];
            descriptor[..column.name.len()].copy_from_slice(column.name.as_bytes());
            descriptor[11] = column.type_code;
            descriptor[16] = column.length;
            descriptor[17] = column.decimals;
            data.extend_from_slice(&descriptor);
        }
        data.push(0x0D);
        for row in &self.rows {
            data.extend_from_slice(row);
        }
        data.push(0x1A);
        data
    }
}

/// Scenario table: dBASE III, NAME C(10), AGE N(10), three records.
pub fn people() -> TableBuilder {
    TableBuilder::new(0x03)
        .column(column("NAME", b'C', 10))
        .column(column("AGE", b'N', 10))
        .row(false, &[b"Alice", b"        34"])
        .row(true, &[b"Bob", b"        51"])
        .row(false, &[b"Carol", b"         7"])
}

/// Counts I/O calls made on the wrapped stream.
pub struct CountingStream<R> {
    inner: R,
    pub reads: Rc<Cell<usize>>,
    pub seeks: Rc<Cell<usize>>,
    pub seek_targets: Rc<std::cell::RefCell<Vec<u64>>>,
}

impl CountingStream<Cursor<Vec<u8>>> {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(data),
            reads: Rc::default(),
            seeks: Rc::default(),
            seek_targets: Rc::default(),
        }
    }
}

impl<R: Read> Read for CountingStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads.set(self.reads.get() + 1);
        self.inner.read(buf)
    }
}

impl<R: Seek> Seek for CountingStream<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.seeks.set(self.seeks.get() + 1);
        let target = self.inner.seek(pos)?;
        self.seek_targets.borrow_mut().push(target);
        Ok(target)
    }
}
