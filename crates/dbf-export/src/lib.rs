//! CSV and SQL export of dBASE tables.
//!
//! Exporters read records through [`dbf_core::DbfTable`] and render each
//! field with [`render_field`]. Character data is decoded with the code page
//! named by the table's language driver unless an encoding is given.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use dbf_core::DbfTable;
//! use dbf_export::{CsvExporter, CsvOptions};
//!
//! let mut table = DbfTable::open(Path::new("customers.dbf")).unwrap();
//! let exporter = CsvExporter::new(CsvOptions::new().with_delimiter(b';'));
//! let summary = exporter.export(&mut table, std::io::stdout()).unwrap();
//! eprintln!("{} records written", summary.written);
//! ```

pub mod csv_export;
pub mod encoding;
mod error;
pub mod sql_export;
mod summary;
pub mod value;

// Re-export error types
pub use error::{ExportError, Result};

// Re-export exporters
pub use csv_export::{CsvExporter, CsvOptions};
pub use sql_export::{DEFAULT_TABLE_NAME, SqlExporter, SqlOptions, sql_identifier};
pub use summary::ExportSummary;

// Re-export rendering helpers
pub use encoding::{encoding_for_language_driver, encoding_from_label, table_encoding};
pub use value::{TrimMode, render_field};
