//! Table statistics shown by `dbf info` and `dbf fields`.

use dbf_core::{DbfTable, FieldDescriptor};
use dbf_export::encoding_for_language_driver;
use serde::Serialize;

/// Header statistics of one table.
#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    pub source: String,
    pub version_code: u8,
    pub version: String,
    pub has_memo: bool,
    /// `YYYY-MM-DD`, absent when the header carries no date.
    pub last_update: Option<String>,
    pub records: u32,
    pub header_length: u16,
    pub record_length: u16,
    pub columns: usize,
    pub language_driver: u8,
    /// Code page used to decode character fields.
    pub encoding: &'static str,
    pub incomplete_transaction: bool,
    pub encrypted: bool,
    pub production_mdx: bool,
    pub schema_mismatch: Option<MismatchInfo>,
    pub fields: Vec<FieldDescriptor>,
}

/// Record length disagreement reported in [`TableInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MismatchInfo {
    pub declared: u16,
    pub computed: u64,
}

impl TableInfo {
    /// Collect statistics for `table`, read from `source`.
    pub fn from_table<R>(source: &str, table: &DbfTable<R>) -> Self {
        let header = table.header();
        Self {
            source: source.to_string(),
            version_code: table.version().code(),
            version: table.version_text().into_owned(),
            has_memo: table.has_memo(),
            last_update: table.last_update_text(),
            records: table.row_count(),
            header_length: table.header_size(),
            record_length: table.record_size(),
            columns: table.column_count(),
            language_driver: header.language_driver,
            encoding: encoding_for_language_driver(header.language_driver).name(),
            incomplete_transaction: header.incomplete_transaction,
            encrypted: header.encrypted,
            production_mdx: header.production_mdx,
            schema_mismatch: table.schema_mismatch().map(|mismatch| MismatchInfo {
                declared: mismatch.declared,
                computed: mismatch.computed,
            }),
            fields: table.fields().to_vec(),
        }
    }

    /// `"<version> (with memo)"` or `"<version> (without memo)"`.
    #[must_use]
    pub fn version_label(&self) -> String {
        let memo = if self.has_memo {
            "with memo"
        } else {
            "without memo"
        };
        format!("{} ({memo})", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        let mut data = vec![0u8; 32];
        data[0] = 0x83;
        data[8..10].copy_from_slice(&65u16.to_le_bytes());
        data[10..12].copy_from_slice(&3u16.to_le_bytes());
        let mut field = [0u8; 32];
        field[..2].copy_from_slice(b"ID");
        field[11] = b'C';
        field[16] = 2;
        data.extend_from_slice(&field);
        data.push(0x0D);

        let table = DbfTable::from_reader(std::io::Cursor::new(data)).unwrap();
        let info = TableInfo::from_table("t.dbf", &table);
        assert_eq!(info.version_label(), "FoxBase+/dBASE III+ (with memo)");
        assert_eq!(info.last_update, None);
        assert_eq!(info.encoding, "windows-1252");
        assert_eq!(info.schema_mismatch, None);
    }
}
