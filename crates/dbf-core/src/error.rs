//! Error types for dBASE table operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when opening or reading a dBASE table.
#[derive(Debug, Error)]
pub enum DbfError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Fewer bytes were available than the format requires.
    #[error(
        "truncated {context} at offset {offset}: expected {expected} bytes, got {actual}"
    )]
    TruncatedInput {
        context: &'static str,
        offset: u64,
        expected: usize,
        actual: usize,
    },

    /// Header and field table do not describe a usable schema.
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },

    /// Field lengths do not add up to the declared record length.
    #[error(
        "schema mismatch: header declares record length {declared}, fields span {computed} bytes"
    )]
    SchemaMismatch { declared: u16, computed: u64 },

    /// Record index past the end of the table.
    #[error("record {index} out of range (table has {record_count} records)")]
    RecordOutOfRange { index: u64, record_count: u32 },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dBASE operations.
pub type Result<T> = std::result::Result<T, DbfError>;

impl DbfError {
    /// Create a TruncatedInput error.
    pub fn truncated(context: &'static str, offset: u64, expected: usize, actual: usize) -> Self {
        Self::TruncatedInput {
            context,
            offset,
            expected,
            actual,
        }
    }

    /// Create an InvalidSchema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Byte offset in the file the error refers to, when there is one.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::TruncatedInput { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Whether the error only warns about the schema and the table is still readable.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }
}
