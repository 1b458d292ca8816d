//! dBASE/FoxPro table (`.dbf`) reader.
//!
//! This crate decodes the binary layout of dBASE III/IV/5, FoxBase, FoxPro
//! and Visual FoxPro tables and exposes the schema and raw record bytes.
//! Turning field bytes into typed values is left to consumers.
//!
//! # Features
//!
//! - Header decoding with host-independent little-endian normalization
//! - Field descriptor decoding with per-dialect type resolution
//! - Record offsets computed from field lengths (deletion flag at byte 0)
//! - Sequential and indexed record access over any `Read + Seek` stream
//! - `-` as a path reads the table from standard input
//! - Optional `serde` serialization of header and schema metadata
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use dbf_core::DbfTable;
//!
//! let mut table = DbfTable::open(Path::new("customers.dbf")).unwrap();
//! println!("{} ({} rows)", table.version_text(), table.row_count());
//!
//! while let Some(record) = table.read_next().unwrap() {
//!     for (column, field) in table.fields().iter().enumerate() {
//!         let bytes = table.field_bytes(&record, column).unwrap_or_default();
//!         println!("{} = {:?}", field.name, String::from_utf8_lossy(bytes));
//!     }
//! }
//! table.close().unwrap();
//! ```

pub mod endian;
mod error;
pub mod header;
pub mod offsets;
mod reader;
mod stream;
mod table;
mod types;

// Re-export error types
pub use error::{DbfError, Result};

// Re-export header types
pub use header::{
    DESCRIPTOR_LEN, DbfVersion, Dialect, FieldDescriptor, HEADER_LEN, LastUpdate, TableHeader,
    decode_fields, decode_header,
};

// Re-export core types
pub use offsets::{SchemaMismatch, compute_offsets};
pub use types::{
    ACTIVE_MARKER, ColumnCountMode, DELETED_MARKER, DbfReaderOptions, DbfRecord, FieldKind,
    SchemaMismatchPolicy, field_bytes, is_deleted,
};

// Re-export table and reader functionality
pub use reader::Records;
pub use stream::{DbfSource, STDIN_PATH};
pub use table::DbfTable;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
