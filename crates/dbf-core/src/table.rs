//! Table handle.
//!
//! [`DbfTable`] owns the input stream together with the decoded header and
//! field descriptors. Decoding happens eagerly when the table is opened, so
//! every accessor is a plain lookup.

use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DbfError, Result};
use crate::header::{
    DbfVersion, FieldDescriptor, LastUpdate, TableHeader, decode_fields, decode_header,
};
use crate::offsets::{SchemaMismatch, check_record_span};
use crate::stream::DbfSource;
use crate::types::{DbfReaderOptions, FieldKind, SchemaMismatchPolicy};

/// An open dBASE table.
#[derive(Debug)]
pub struct DbfTable<R> {
    pub(crate) stream: R,
    pub(crate) header: TableHeader,
    pub(crate) fields: Vec<FieldDescriptor>,
    /// Last record returned by `read_next`; `None` before the first read.
    pub(crate) cursor: Option<u64>,
    schema_mismatch: Option<SchemaMismatch>,
}

impl DbfTable<DbfSource> {
    /// Open a table by path; `-` reads standard input.
    ///
    /// # Errors
    /// `FileNotFound`, `Io`, or any header/descriptor decoding error.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_options(path, &DbfReaderOptions::default())
    }

    /// Open a table by path with options.
    ///
    /// # Errors
    /// See [`DbfTable::open`].
    pub fn open_with_options(path: &Path, options: &DbfReaderOptions) -> Result<Self> {
        let source = DbfSource::open(path)?;
        debug!(path = %path.display(), stdin = source.is_stdin(), "opening dBASE table");
        Self::from_reader_with_options(source, options)
    }

    /// Release the underlying file.
    ///
    /// Standard input is left open. Consuming the handle makes a second
    /// close impossible.
    ///
    /// # Errors
    /// Always returns `Ok(())`. The file is closed by dropping the
    /// [`std::fs::File`], which ignores any error the OS reports from
    /// `close`, so a failed close is not observable here. The `Result`
    /// leaves room for sources whose release can fail.
    pub fn close(self) -> Result<()> {
        match self.stream {
            DbfSource::File(file) => drop(file),
            DbfSource::Stdin(_) => {}
        }
        debug!("dBASE table closed");
        Ok(())
    }
}

impl<R: Read + Seek> DbfTable<R> {
    /// Decode a table from an already opened stream.
    ///
    /// # Errors
    /// Any header/descriptor decoding error.
    pub fn from_reader(stream: R) -> Result<Self> {
        Self::from_reader_with_options(stream, &DbfReaderOptions::default())
    }

    /// Decode a table from an already opened stream with options.
    ///
    /// The stream is rewound to the start before decoding.
    ///
    /// # Errors
    /// `TruncatedInput`, `InvalidSchema`, `Io`, or `SchemaMismatch` under
    /// [`SchemaMismatchPolicy::Reject`].
    pub fn from_reader_with_options(mut stream: R, options: &DbfReaderOptions) -> Result<Self> {
        stream.seek(SeekFrom::Start(0))?;
        let header = decode_header(&mut stream)?;
        header.validate()?;
        let fields = decode_fields(&mut stream, &header, options.column_count)?;

        let schema_mismatch = check_record_span(&fields, header.record_length);
        if let Some(mismatch) = schema_mismatch {
            match options.schema_mismatch {
                SchemaMismatchPolicy::Reject => return Err(mismatch.into()),
                SchemaMismatchPolicy::Warn => warn!(
                    declared = mismatch.declared,
                    computed = mismatch.computed,
                    "field lengths do not match the declared record length"
                ),
            }
        }

        debug!(
            version = %header.version,
            records = header.record_count,
            columns = fields.len(),
            header_length = header.header_length,
            record_length = header.record_length,
            "decoded dBASE header"
        );

        Ok(Self {
            stream,
            header,
            fields,
            cursor: None,
            schema_mismatch,
        })
    }
}

impl<R> DbfTable<R> {
    /// Give back the stream.
    pub fn into_inner(self) -> R {
        self.stream
    }

    /// The decoded header.
    #[must_use]
    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    /// All field descriptors in column order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Descriptor of `column`.
    #[must_use]
    pub fn field(&self, column: usize) -> Option<&FieldDescriptor> {
        self.fields.get(column)
    }

    /// Index of the column called `name` (ASCII case-insensitive).
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Number of records declared in the header.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.header.record_count
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.field(column).map(|field| field.name.as_str())
    }

    #[must_use]
    pub fn column_type(&self, column: usize) -> Option<char> {
        self.field(column).map(FieldDescriptor::type_char)
    }

    #[must_use]
    pub fn column_kind(&self, column: usize) -> Option<FieldKind> {
        self.field(column).map(|field| field.kind)
    }

    #[must_use]
    pub fn column_length(&self, column: usize) -> Option<u8> {
        self.field(column).map(|field| field.length)
    }

    #[must_use]
    pub fn column_decimals(&self, column: usize) -> Option<u8> {
        self.field(column).map(|field| field.decimals)
    }

    #[must_use]
    pub fn column_offset(&self, column: usize) -> Option<usize> {
        self.field(column).map(|field| field.offset)
    }

    #[must_use]
    pub fn column_address(&self, column: usize) -> Option<u32> {
        self.field(column).map(|field| field.address)
    }

    /// Header length in bytes, descriptors and terminator included.
    #[must_use]
    pub fn header_size(&self) -> u16 {
        self.header.header_length
    }

    /// Record length in bytes, deletion flag included.
    #[must_use]
    pub fn record_size(&self) -> u16 {
        self.header.record_length
    }

    #[must_use]
    pub fn version(&self) -> DbfVersion {
        self.header.version
    }

    /// Product name of the table's dialect.
    #[must_use]
    pub fn version_text(&self) -> Cow<'static, str> {
        self.header.version.description()
    }

    /// Whether the table has a memo file.
    #[must_use]
    pub fn has_memo(&self) -> bool {
        self.header.has_memo()
    }

    /// Last update date, `None` when no date was recorded.
    #[must_use]
    pub fn last_update(&self) -> Option<LastUpdate> {
        let date = self.header.last_update;
        date.is_set().then_some(date)
    }

    /// Last update date as `YYYY-MM-DD`.
    #[must_use]
    pub fn last_update_text(&self) -> Option<String> {
        self.last_update().map(|date| date.to_string())
    }

    /// Field layout disagreement found while opening, if any.
    #[must_use]
    pub fn schema_mismatch(&self) -> Option<SchemaMismatch> {
        self.schema_mismatch
    }

    /// Fail if the field layout disagrees with the record length.
    ///
    /// # Errors
    /// `SchemaMismatch` when one was found while opening.
    pub fn validate(&self) -> Result<()> {
        match self.schema_mismatch {
            Some(mismatch) => Err(DbfError::from(mismatch)),
            None => Ok(()),
        }
    }

    /// Index of the last record returned by `read_next`.
    #[must_use]
    pub fn cursor(&self) -> Option<u64> {
        self.cursor
    }
}
