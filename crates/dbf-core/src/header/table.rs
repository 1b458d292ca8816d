//! Table header record.
//!
//! # Structure (32 bytes)
//!
//! | Offset | Length | Field                 | Description                      |
//! |--------|--------|-----------------------|----------------------------------|
//! | 0      | 1      | version               | Dialect code, bit 7 = memo file  |
//! | 1-3    | 3      | last_update           | YY (since 1900), MM, DD          |
//! | 4-7    | 4      | record_count          | u32 LE                           |
//! | 8-9    | 2      | header_length         | u16 LE, header + fields + 0x0D   |
//! | 10-11  | 2      | record_length         | u16 LE, includes deletion flag   |
//! | 12-13  | 2      | reserved              |                                  |
//! | 14     | 1      | incomplete_transaction|                                  |
//! | 15     | 1      | encryption            |                                  |
//! | 16-27  | 12     | reserved (multi-user) |                                  |
//! | 28     | 1      | production_mdx        |                                  |
//! | 29     | 1      | language_driver       | Code page id                     |
//! | 30-31  | 2      | reserved              |                                  |

use std::fmt;
use std::io::Read;

use chrono::NaiveDate;

use super::field::DESCRIPTOR_LEN;
use super::version::DbfVersion;
use crate::endian::{le_u16, le_u32};
use crate::error::{DbfError, Result};
use crate::stream::read_fully;
use crate::types::ColumnCountMode;

/// Fixed header length in bytes.
pub const HEADER_LEN: usize = 32;

/// Byte closing the field descriptor array.
pub const HEADER_TERMINATOR: u8 = 0x0D;

/// Date of the last update, as stored: years since 1900, month, day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LastUpdate {
    pub year_offset: u8,
    pub month: u8,
    pub day: u8,
}

impl LastUpdate {
    /// Calendar year (`1900 + year_offset`).
    #[must_use]
    pub fn year(self) -> i32 {
        1900 + i32::from(self.year_offset)
    }

    /// Whether a date was recorded at all (the year byte is non-zero).
    #[must_use]
    pub fn is_set(self) -> bool {
        self.year_offset != 0
    }

    /// The date as a calendar date, if the stored bytes form one.
    #[must_use]
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), u32::from(self.month), u32::from(self.day))
    }
}

impl fmt::Display for LastUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month, self.day)
    }
}

/// Decoded table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableHeader {
    pub version: DbfVersion,
    pub last_update: LastUpdate,
    pub record_count: u32,
    pub header_length: u16,
    pub record_length: u16,
    pub incomplete_transaction: bool,
    pub encrypted: bool,
    pub production_mdx: bool,
    pub language_driver: u8,
}

impl TableHeader {
    /// Map the 32 header bytes onto a header. No validation is done.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Self {
        Self {
            version: DbfVersion::new(bytes[0]),
            last_update: LastUpdate {
                year_offset: bytes[1],
                month: bytes[2],
                day: bytes[3],
            },
            record_count: le_u32([bytes[4], bytes[5], bytes[6], bytes[7]]),
            header_length: le_u16([bytes[8], bytes[9]]),
            record_length: le_u16([bytes[10], bytes[11]]),
            incomplete_transaction: bytes[14] != 0,
            encrypted: bytes[15] != 0,
            production_mdx: bytes[28] != 0,
            language_driver: bytes[29],
        }
    }

    /// Whether bit 7 of the version byte announces a memo file.
    #[must_use]
    pub fn has_memo(&self) -> bool {
        self.version.has_memo()
    }

    /// Number of field descriptors implied by the header length.
    ///
    /// `(header_length - 32 - 1) / 32`, the `- 1` being the terminator byte.
    /// [`ColumnCountMode::Permissive`] floors a trailing partial descriptor;
    /// [`ColumnCountMode::Strict`] rejects it.
    ///
    /// # Errors
    /// `InvalidSchema` when the header length leaves no room for descriptors.
    pub fn column_count(&self, mode: ColumnCountMode) -> Result<usize> {
        let header_length = usize::from(self.header_length);
        if header_length <= HEADER_LEN {
            return Err(DbfError::invalid_schema(format!(
                "header length {header_length} leaves no room for field descriptors"
            )));
        }
        let descriptor_bytes = header_length - HEADER_LEN - 1;
        let remainder = descriptor_bytes % DESCRIPTOR_LEN;
        if remainder != 0 && mode == ColumnCountMode::Strict {
            return Err(DbfError::invalid_schema(format!(
                "header length {header_length} leaves a partial field descriptor of {remainder} bytes"
            )));
        }
        Ok(descriptor_bytes / DESCRIPTOR_LEN)
    }

    /// Check the invariants needed to read records.
    ///
    /// # Errors
    /// `InvalidSchema` when the header or record length is zero or the
    /// header length is too short to hold any descriptor table.
    pub fn validate(&self) -> Result<()> {
        if self.record_length == 0 {
            return Err(DbfError::invalid_schema("record length is zero"));
        }
        if usize::from(self.header_length) <= HEADER_LEN {
            return Err(DbfError::invalid_schema(format!(
                "header length {} is not larger than the {HEADER_LEN}-byte header",
                self.header_length
            )));
        }
        Ok(())
    }

    /// Absolute byte position of record `index`.
    #[must_use]
    pub fn record_position(&self, index: u64) -> u64 {
        u64::from(self.header_length) + index * u64::from(self.record_length)
    }
}

/// Decode the table header from the current stream position.
///
/// The stream must be positioned at the start of the file.
///
/// # Errors
/// `TruncatedInput` if fewer than 32 bytes are available, `Io` on read failure.
pub fn decode_header<R: Read + ?Sized>(reader: &mut R) -> Result<TableHeader> {
    let mut buf = [0u8; HEADER_LEN];
    let read = read_fully(reader, &mut buf)?;
    if read < HEADER_LEN {
        return Err(DbfError::truncated("table header", 0, HEADER_LEN, read));
    }
    Ok(TableHeader::from_bytes(&buf))
}
