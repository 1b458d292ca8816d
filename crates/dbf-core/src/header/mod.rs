//! Header and field descriptor decoding.
//!
//! A table starts with:
//! - the 32-byte table header (version, date, counts, lengths)
//! - one 32-byte descriptor per column
//! - a `0x0D` terminator (plus a 263-byte backlink in Visual FoxPro)

pub mod field;
pub mod table;
pub mod version;

pub use field::{
    DESCRIPTOR_LEN, FIELD_NAME_LEN, FieldDescriptor, decode_fields, parse_descriptor,
};
pub use table::{HEADER_LEN, HEADER_TERMINATOR, LastUpdate, TableHeader, decode_header};
pub use version::{DbfVersion, Dialect, MEMO_FLAG};
