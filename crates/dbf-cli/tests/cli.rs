//! Runs the `dbf` binary against tables written to temporary files.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// dBASE III table: CODE C(4), QTY N(5); the second record is deleted.
fn stock_table() -> Vec<u8> {
    let mut data = vec![0u8; 32];
    data[0] = 0x03;
    data[1..4].copy_from_slice(&[121, 12, 31]);
    data[4..8].copy_from_slice(&3u32.to_le_bytes());
    data[8..10].copy_from_slice(&97u16.to_le_bytes());
    data[10..12].copy_from_slice(&10u16.to_le_bytes());
    for (name, type_code, length) in [("CODE", b'C', 4u8), ("QTY", b'N', 5)] {
        let mut descriptor = [0u8; 32];
        descriptor[..name.len()].copy_from_slice(name.as_bytes());
        descriptor[11] = type_code;
        descriptor[16] = length;
        data.extend_from_slice(&descriptor);
    }
    data.push(0x0D);
    data.extend_from_slice(b" A1     12");
    data.extend_from_slice(b"*B2      3");
    data.extend_from_slice(b" C3   1500");
    data.push(0x1A);
    data
}

fn write_table(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("stock.dbf");
    std::fs::write(&path, stock_table()).unwrap();
    path
}

fn dbf(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dbf"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_info_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir);
    let output = dbf(&["info", arg(&path), "--json"]);
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["version"], "FoxBase+/dBASE III+");
    assert_eq!(info["has_memo"], false);
    assert_eq!(info["last_update"], "2021-12-31");
    assert_eq!(info["records"], 3);
    assert_eq!(info["header_length"], 97);
    assert_eq!(info["record_length"], 10);
    assert_eq!(info["columns"], 2);
    assert_eq!(info["fields"][1]["name"], "QTY");
    assert_eq!(info["fields"][1]["offset"], 5);
    assert!(info["schema_mismatch"].is_null());
}

#[test]
fn test_info_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir);
    let output = dbf(&["--color", "never", "info", arg(&path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("FoxBase+/dBASE III+ (without memo)"));
    assert!(stdout.contains("2021-12-31"));
}

#[test]
fn test_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir);
    let output = dbf(&["--color", "never", "fields", arg(&path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("CODE"));
    assert!(stdout.contains("QTY"));
    assert!(stdout.contains("character"));
}

#[test]
fn test_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir);
    let out = dir.path().join("stock.csv");
    let output = dbf(&["csv", arg(&path), "-o", arg(&out), "--delimiter", ";"]);
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "CODE;QTY\nA1;12\nC3;1500\n"
    );
}

#[test]
fn test_csv_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dbf"))
        .args(["csv", "-", "--include-deleted"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(&stock_table())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "CODE,QTY\nA1,12\nB2,3\nC3,1500\n"
    );
}

#[test]
fn test_sql_default_table_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir);
    let output = dbf(&["sql", arg(&path), "--trim", "r", "--no-drop"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("drop table"));
    assert!(stdout.contains("CREATE TABLE stock(\nCODE\tvarchar(4),\nQTY\tint\n);\n"));
    assert!(stdout.contains("INSERT INTO stock VALUES('A1',12);\n"));
    assert!(stdout.contains("INSERT INTO stock VALUES('C3',1500);\n"));
}

#[test]
fn test_sql_table_name_from_spaced_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("my stock.dbf");
    std::fs::write(&path, stock_table()).unwrap();
    let output = dbf(&["sql", arg(&path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("drop table my_stock;\n"));
    assert!(stdout.contains("CREATE TABLE my_stock(\n"));
    assert!(stdout.contains("INSERT INTO my_stock VALUES('A1  ',12);\n"));
}

#[test]
fn test_sql_invalid_trim_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir);
    let output = dbf(&["sql", arg(&path), "--trim", "x"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: invalid trim mode 'x'"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.dbf");
    let output = dbf(&["info", arg(&missing)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("file not found"));
}

#[test]
fn test_reject_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = stock_table();
    data[10..12].copy_from_slice(&12u16.to_le_bytes());
    let path = dir.path().join("bad.dbf");
    std::fs::write(&path, data).unwrap();

    let output = dbf(&["info", arg(&path), "--json"]);
    assert!(output.status.success());
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["schema_mismatch"]["declared"], 12);
    assert_eq!(info["schema_mismatch"]["computed"], 10);

    let output = dbf(&["info", arg(&path), "--reject-mismatch"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("schema mismatch"));
}
