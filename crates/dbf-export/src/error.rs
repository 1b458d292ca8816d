//! Error types for table export.

use dbf_core::DbfError;
use thiserror::Error;

/// Errors that can occur while exporting a table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Reading the source table failed.
    #[error(transparent)]
    Dbf(#[from] DbfError),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error on the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A column type the target format cannot represent.
    #[error("field {name} has type {type_code} which cannot be exported to {format}")]
    UnsupportedField {
        name: String,
        type_code: char,
        format: &'static str,
    },

    /// Unknown trim mode name.
    #[error("invalid trim mode '{0}': expected none, left, right or both")]
    InvalidTrimMode(String),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create an UnsupportedField error.
    pub fn unsupported_field(
        name: impl Into<String>,
        type_code: char,
        format: &'static str,
    ) -> Self {
        Self::UnsupportedField {
            name: name.into(),
            type_code,
            format,
        }
    }
}
