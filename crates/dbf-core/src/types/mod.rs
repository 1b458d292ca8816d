//! Core types for dBASE table handling.
//!
//! Field kinds, raw record buffers and reader options.

mod kind;
mod options;
mod record;

pub use kind::FieldKind;
pub use options::{ColumnCountMode, DbfReaderOptions, SchemaMismatchPolicy};
pub use record::{ACTIVE_MARKER, DELETED_MARKER, DbfRecord, field_bytes, is_deleted};
