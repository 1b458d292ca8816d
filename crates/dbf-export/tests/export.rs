//! End-to-end exports of in-memory tables.

use std::io::{Cursor, Write};

use dbf_core::DbfTable;
use dbf_export::{
    CsvExporter, CsvOptions, ExportError, SqlExporter, SqlOptions, TrimMode, encoding_from_label,
};

/// Build table bytes from `(name, type, length)` columns and raw records.
fn table_bytes(
    version: u8,
    language_driver: u8,
    columns: &[(&str, u8, u8)],
    records: &[&[u8]],
) -> Vec<u8> {
    let header_length = 32 + columns.len() * 32 + 1;
    let record_length = 1 + columns.iter().map(|c| usize::from(c.2)).sum::<usize>();
    let mut data = vec![0u8; 32];
    data[0] = version;
    data[1..4].copy_from_slice(&[124, 1, 2]);
    data[4..8].copy_from_slice(&(records.len() as u32).to_le_bytes());
    data[8..10].copy_from_slice(&(header_length as u16).to_le_bytes());
    data[10..12].copy_from_slice(&(record_length as u16).to_le_bytes());
    data[29] = language_driver;
    for (name, type_code, length) in columns {
        let mut descriptor = [0u8; 32];
        descriptor[..name.len()].copy_from_slice(name.as_bytes());
        descriptor[11] = *type_code;
        descriptor[16] = *length;
        data.extend_from_slice(&descriptor);
    }
    data.push(0x0D);
    for record in records {
        assert_eq!(record.len(), record_length);
        data.extend_from_slice(record);
    }
    data.push(0x1A);
    data
}

fn people() -> DbfTable<Cursor<Vec<u8>>> {
    let data = table_bytes(
        0x03,
        0,
        &[("NAME", b'C', 8), ("AGE", b'N', 3), ("BORN", b'D', 8), ("ACTIVE", b'L', 1)],
        &[
            b" Alice    3419700101T",
            b"*Bob      5119600202F",
            b" O'Neil             ?",
        ],
    );
    DbfTable::from_reader(Cursor::new(data)).unwrap()
}

#[test]
fn test_csv_skips_deleted_records() {
    let mut table = people();
    let mut out = Vec::new();
    let summary = CsvExporter::default().export(&mut table, &mut out).unwrap();

    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped_deleted, 1);
    assert_eq!(summary.total(), 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "NAME,AGE,BORN,ACTIVE\nAlice,34,19700101,true\nO'Neil,,,false\n"
    );
}

#[test]
fn test_csv_include_deleted_with_delimiter() {
    let mut table = people();
    let options = CsvOptions::new().with_delimiter(b';').include_deleted(true);
    let mut out = Vec::new();
    let summary = CsvExporter::new(options).export(&mut table, &mut out).unwrap();

    assert_eq!(summary.written, 3);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "NAME;AGE;BORN;ACTIVE");
    assert_eq!(lines[2], "Bob;51;19600202;false");
}

#[test]
fn test_csv_restarts_from_first_record() {
    let mut table = people();
    table.read_next().unwrap();
    table.read_next().unwrap();
    let mut out = Vec::new();
    let summary = CsvExporter::default().export(&mut table, &mut out).unwrap();
    assert_eq!(summary.total(), 3);
    assert!(table.read_next().unwrap().is_none());
}

#[test]
fn test_csv_quotes_delimiters() {
    let data = table_bytes(0x03, 0, &[("NOTE", b'C', 6)], &[b" a,b   "]);
    let mut table = DbfTable::from_reader(Cursor::new(data)).unwrap();
    let mut out = Vec::new();
    CsvExporter::default().export(&mut table, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "NOTE\n\"a,b\"\n");
}

#[test]
fn test_csv_decodes_language_driver_code_page() {
    let data = table_bytes(0x03, 0xC9, &[("CITY", b'C', 6)], &[b" \xcc\xee\xf1\xea\xe2\xe0"]);
    let mut table = DbfTable::from_reader(Cursor::new(data)).unwrap();
    let mut out = Vec::new();
    CsvExporter::default().export(&mut table, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "CITY\nМосква\n");
}

#[test]
fn test_csv_encoding_override() {
    let data = table_bytes(0x03, 0, &[("CITY", b'C', 6)], &[b" \xcc\xee\xf1\xea\xe2\xe0"]);
    let mut table = DbfTable::from_reader(Cursor::new(data)).unwrap();
    let options = CsvOptions::new().with_encoding(encoding_from_label("cp1251").unwrap());
    let mut out = Vec::new();
    CsvExporter::new(options).export(&mut table, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().ends_with("Москва\n"));
}

#[test]
fn test_sql_script() {
    let mut table = people();
    let options = SqlOptions::new("people").with_source_name("people.dbf");
    let mut out = Vec::new();
    let summary = SqlExporter::new(options).export(&mut table, &mut out).unwrap();

    assert_eq!(summary.written, 2);
    let expected = "\
-- people --
--
-- SQL code with the contents of dbf file people.dbf

drop table people;

CREATE TABLE people(
NAME\tvarchar(8),
AGE\tint,
BORN\tdate,
ACTIVE\tboolean
);
INSERT INTO people VALUES('Alice   ',34,'19700101',true);
INSERT INTO people VALUES('O\\'Neil  ',NULL,NULL,false);
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_sql_trim_and_no_drop() {
    let mut table = people();
    let options = SqlOptions::new("p")
        .with_trim(TrimMode::Right)
        .without_drop()
        .include_deleted(true);
    let mut out = Vec::new();
    let summary = SqlExporter::new(options).export(&mut table, &mut out).unwrap();

    assert_eq!(summary.written, 3);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("drop table"));
    assert!(text.contains("CREATE TABLE p(\n"));
    assert!(text.contains("INSERT INTO p VALUES('Alice',34,'19700101',true);\n"));
    assert!(text.contains("INSERT INTO p VALUES('Bob',51,'19600202',false);\n"));
}

#[test]
fn test_sql_refuses_memo_columns() {
    let data = table_bytes(0x83, 0, &[("ID", b'C', 2), ("NOTES", b'M', 10)], &[b" 01         1"]);
    let mut table = DbfTable::from_reader(Cursor::new(data)).unwrap();
    let mut out = Vec::new();
    let err = SqlExporter::default().export(&mut table, &mut out).unwrap_err();
    assert!(matches!(
        err,
        ExportError::UnsupportedField { ref name, type_code: 'M', .. } if name == "NOTES"
    ));
    assert!(out.is_empty());
}

#[test]
fn test_sql_visual_foxpro_binary_columns() {
    let mut record = vec![b' '];
    record.extend_from_slice(&7i32.to_le_bytes());
    record.extend_from_slice(&1.25f64.to_le_bytes());
    let data = table_bytes(0x30, 0, &[("QTY", b'I', 4), ("PRICE", b'B', 8)], &[record.as_slice()]);
    let mut table = DbfTable::from_reader(Cursor::new(data)).unwrap();
    let mut out = Vec::new();
    SqlExporter::new(SqlOptions::new("items")).export(&mut table, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("QTY\tint,\nPRICE\tnumeric(8, 0)\n"));
    assert!(text.contains("INSERT INTO items VALUES(7,1);\n"));
}

#[test]
fn test_sql_output_from_unsafe_field_text() {
    let data = table_bytes(
        0x03,
        0,
        &[("A", b'C', 4), ("B", b'C', 4), ("N", b'N', 12), ("X", b'Y', 2)],
        &[
            b" ab\\ x'y 1);DROP x--;ok",
            b" c\\d z             42zz",
        ],
    );
    let mut table = DbfTable::from_reader(Cursor::new(data)).unwrap();
    let options = SqlOptions::new("my table").with_trim(TrimMode::Both);
    let mut out = Vec::new();
    SqlExporter::new(options).export(&mut table, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("-- my_table --\n"));
    assert!(text.contains("drop table my_table;\n"));
    assert!(text.contains(
        "CREATE TABLE my_table(\nA\tvarchar(4),\nB\tvarchar(4),\nN\tnumeric(12, 0),\nX\tvarchar(2) /* dBASE type Y */\n);\n"
    ));
    assert!(text.contains(r"INSERT INTO my_table VALUES('ab\\','x\'y',NULL,'ok');"));
    assert!(text.contains(r"INSERT INTO my_table VALUES('c\\d','z',42,'zz');"));
    assert!(!text.contains("DROP x"));
}

#[test]
fn test_export_to_file() {
    let mut table = people();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    CsvExporter::default().export(&mut table, file.as_file_mut()).unwrap();
    file.flush().unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.starts_with("NAME,AGE,BORN,ACTIVE\n"));
}
