//! Raw record buffers.

use crate::header::FieldDescriptor;

/// Deletion marker of a record flagged as deleted.
pub const DELETED_MARKER: u8 = b'*';

/// Deletion marker of an active record.
pub const ACTIVE_MARKER: u8 = b' ';

/// One record exactly as stored, deletion flag included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfRecord {
    index: u64,
    data: Vec<u8>,
}

impl DbfRecord {
    /// Wrap the bytes of record `index`.
    #[must_use]
    pub fn new(index: u64, data: Vec<u8>) -> Self {
        Self { index, data }
    }

    /// Zero-based ordinal of the record in the table.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// All record bytes, starting with the deletion flag.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the record bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First byte of the record.
    #[must_use]
    pub fn deletion_marker(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Whether the record is flagged as deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        is_deleted(&self.data)
    }

    /// Bytes of `field` within this record.
    ///
    /// Returns `None` if the field lies outside the buffer, which only
    /// happens when the descriptors span more than the declared record length.
    #[must_use]
    pub fn field_bytes(&self, field: &FieldDescriptor) -> Option<&[u8]> {
        field_bytes(&self.data, field)
    }
}

impl AsRef<[u8]> for DbfRecord {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Whether a raw record buffer is flagged as deleted.
#[must_use]
pub fn is_deleted(record: &[u8]) -> bool {
    record.first() == Some(&DELETED_MARKER)
}

/// Slice `field` out of a raw record buffer.
#[must_use]
pub fn field_bytes<'a>(record: &'a [u8], field: &FieldDescriptor) -> Option<&'a [u8]> {
    record.get(field.offset..field.end())
}
