//! Field descriptor parsing.
//!
//! Descriptors follow the table header back to back, one per column, and
//! the array is closed by a `0x0D` byte.
//!
//! # Descriptor Structure (32 bytes)
//!
//! | Offset | Field      | Type     | Description                           |
//! |--------|------------|----------|---------------------------------------|
//! | 0-10   | name       | char[11] | ASCII, NUL padded, maybe unterminated |
//! | 11     | type       | char     | Type code (`C`, `N`, `D`, ...)        |
//! | 12-15  | address    | u32 LE   | Legacy in-memory address, unused      |
//! | 16     | length     | u8       | Field width in bytes                  |
//! | 17     | decimals   | u8       | Digits right of the decimal point     |
//! | 18-30  | reserved   | u8[13]   |                                       |
//! | 31     | index flag | u8       | Production MDX field flag             |

use std::io::Read;

use tracing::debug;

use super::table::{HEADER_LEN, HEADER_TERMINATOR, TableHeader};
use super::version::DbfVersion;
use crate::endian::le_u32;
use crate::error::{DbfError, Result};
use crate::offsets::compute_offsets;
use crate::stream::read_fully;
use crate::types::{ColumnCountMode, FieldKind};

/// Field descriptor length in bytes.
pub const DESCRIPTOR_LEN: usize = 32;

/// Width of the name slot.
pub const FIELD_NAME_LEN: usize = 11;

/// Schema of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// Name decoded from the slot, padding removed.
    pub name: String,
    /// Name slot exactly as stored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub raw_name: [u8; FIELD_NAME_LEN],
    /// Type code as stored.
    pub type_code: u8,
    /// Interpretation of the type code for this table's dialect.
    pub kind: FieldKind,
    /// Stored field address. Informational only.
    pub address: u32,
    /// Width in bytes.
    pub length: u8,
    /// Decimal count.
    pub decimals: u8,
    /// Production MDX field flag.
    pub index_flag: u8,
    /// Byte offset within a record. Computed, never read from disk.
    pub offset: usize,
}

impl FieldDescriptor {
    /// Build a descriptor by hand. The offset is left at 0.
    #[must_use]
    pub fn new(name: &str, type_code: u8, length: u8, decimals: u8, version: DbfVersion) -> Self {
        let mut raw_name = [0u8; FIELD_NAME_LEN];
        for (slot, byte) in raw_name.iter_mut().zip(name.bytes()) {
            *slot = byte;
        }
        Self {
            name: decode_name(&raw_name),
            raw_name,
            type_code,
            kind: FieldKind::resolve(type_code, version),
            address: 0,
            length,
            decimals,
            index_flag: 0,
            offset: 0,
        }
    }

    /// Type code as a character.
    #[must_use]
    pub fn type_char(&self) -> char {
        char::from(self.type_code)
    }

    /// End of the field within a record (exclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + usize::from(self.length)
    }
}

/// Parse one 32-byte descriptor.
#[must_use]
pub fn parse_descriptor(data: &[u8; DESCRIPTOR_LEN], version: DbfVersion) -> FieldDescriptor {
    let mut raw_name = [0u8; FIELD_NAME_LEN];
    raw_name.copy_from_slice(&data[..FIELD_NAME_LEN]);
    let type_code = data[11];

    FieldDescriptor {
        name: decode_name(&raw_name),
        raw_name,
        type_code,
        kind: FieldKind::resolve(type_code, version),
        address: le_u32([data[12], data[13], data[14], data[15]]),
        length: data[16],
        decimals: data[17],
        index_flag: data[31],
        offset: 0,
    }
}

/// Decode the descriptor table that follows the header.
///
/// The stream must be positioned right after the 32-byte header. Offsets
/// are assigned before returning. A descriptor slot starting with the
/// `0x0D` terminator ends the table early; Visual FoxPro tables place a
/// 263-byte backlink after the terminator that is counted in the header
/// length.
///
/// # Errors
/// `InvalidSchema` when the header length implies no descriptors (or a
/// partial one in strict mode), `TruncatedInput` if the stream ends early.
pub fn decode_fields<R: Read + ?Sized>(
    reader: &mut R,
    header: &TableHeader,
    mode: ColumnCountMode,
) -> Result<Vec<FieldDescriptor>> {
    let declared = header.column_count(ColumnCountMode::Permissive)?;
    let expected = declared * DESCRIPTOR_LEN;
    let mut buf = vec![0u8; expected];
    let read = read_fully(reader, &mut buf)?;
    if read < expected {
        return Err(DbfError::truncated(
            "field descriptor table",
            HEADER_LEN as u64,
            expected,
            read,
        ));
    }

    let mut fields = Vec::with_capacity(declared);
    let mut terminated = false;
    for chunk in buf.chunks_exact(DESCRIPTOR_LEN) {
        if chunk[0] == HEADER_TERMINATOR {
            terminated = true;
            break;
        }
        let mut descriptor = [0u8; DESCRIPTOR_LEN];
        descriptor.copy_from_slice(chunk);
        fields.push(parse_descriptor(&descriptor, header.version));
    }

    if !terminated {
        // The full count only stands if the header length divides evenly.
        header.column_count(mode)?;
    } else {
        debug!(
            declared,
            columns = fields.len(),
            "field descriptor table terminated early"
        );
    }

    compute_offsets(&mut fields);
    Ok(fields)
}

/// Decode a name slot: stop at the first NUL, drop trailing spaces.
fn decode_name(slot: &[u8; FIELD_NAME_LEN]) -> String {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(FIELD_NAME_LEN);
    String::from_utf8_lossy(&slot[..end]).trim_end().to_string()
}
