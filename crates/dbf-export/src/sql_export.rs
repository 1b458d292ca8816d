//! SQL export.
//!
//! Produces a script that recreates the table: a comment banner, an
//! optional `drop table`, `CREATE TABLE` and one `INSERT INTO` per record.
//!
//! | dBASE kind          | SQL type                                          |
//! |---------------------|---------------------------------------------------|
//! | Character `C(n)`    | `varchar(n)`                                      |
//! | Numeric `N(l, d)`   | `int` when `l < 10` and `d == 0`, else `numeric(l, d)` |
//! | Float, Double       | `numeric(l, d)`                                   |
//! | Integer             | `int`                                             |
//! | Date                | `date`                                            |
//! | Logical             | `boolean`                                         |
//! | Memo                | refused                                           |
//! | anything else       | `varchar(n)` with the type code in a comment      |
//!
//! Identifiers are reduced to ASCII letters, digits and `_`. Numeric
//! values that do not parse as a finite number are written as NULL.

use std::io::{BufWriter, Read, Seek, Write};

use dbf_core::{DbfTable, FieldDescriptor, FieldKind, field_bytes, is_deleted};
use encoding_rs::Encoding;
use tracing::{debug, info};

use crate::encoding::table_encoding;
use crate::error::{ExportError, Result};
use crate::summary::ExportSummary;
use crate::value::{TrimMode, render_field};

/// Table name used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "dbf_table";

/// Options for SQL export.
#[derive(Debug, Clone)]
pub struct SqlOptions {
    /// Name of the created table.
    pub table_name: String,
    /// Trimming applied to character fields (default: none).
    pub trim: TrimMode,
    /// Emit `drop table` before `CREATE TABLE` (default: true).
    pub emit_drop_statement: bool,
    /// Write records flagged as deleted (default: false).
    pub include_deleted: bool,
    /// Source name shown in the banner.
    pub source_name: Option<String>,
    /// Code page override; the language driver decides when `None`.
    pub encoding: Option<&'static Encoding>,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            trim: TrimMode::None,
            emit_drop_statement: true,
            include_deleted: false,
            source_name: None,
            encoding: None,
        }
    }
}

impl SqlOptions {
    /// Create SQL options for `table_name`.
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    /// Skip the `drop table` statement.
    #[must_use]
    pub fn without_drop(mut self) -> Self {
        self.emit_drop_statement = false;
        self
    }

    #[must_use]
    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// Writes a table as an SQL script.
#[derive(Debug, Clone, Default)]
pub struct SqlExporter {
    options: SqlOptions,
}

impl SqlExporter {
    pub fn new(options: SqlOptions) -> Self {
        Self { options }
    }

    /// Export the schema and every record of `table` to `writer`.
    ///
    /// Nothing is written when the table has a memo column.
    ///
    /// # Errors
    /// `UnsupportedField` for memo columns, table read errors, I/O errors.
    pub fn export<R, W>(&self, table: &mut DbfTable<R>, writer: W) -> Result<ExportSummary>
    where
        R: Read + Seek,
        W: Write,
    {
        if let Some(memo) = table.fields().iter().find(|field| field.kind.is_memo()) {
            return Err(ExportError::unsupported_field(
                &memo.name,
                memo.type_char(),
                "SQL",
            ));
        }

        let encoding = table_encoding(table, self.options.encoding);
        let table_name = sql_identifier(&self.options.table_name);
        let mut out = BufWriter::new(writer);
        self.write_schema(&table_name, table.fields(), &mut out)?;
        debug!(
            table = %table_name,
            encoding = encoding.name(),
            "wrote SQL schema"
        );

        let mut summary = ExportSummary::default();
        let mut buf = Vec::new();
        let mut values: Vec<String> = Vec::with_capacity(table.column_count());
        table.rewind();
        while table.read_next_into(&mut buf)?.is_some() {
            if !self.options.include_deleted && is_deleted(&buf) {
                summary.skipped_deleted += 1;
                continue;
            }
            values.clear();
            for field in table.fields() {
                let bytes = field_bytes(&buf, field).unwrap_or_default();
                let rendered = render_field(bytes, field, self.options.trim, encoding);
                values.push(sql_literal(field.kind, rendered.as_deref()));
            }
            writeln!(
                out,
                "INSERT INTO {table_name} VALUES({});",
                values.join(",")
            )?;
            summary.written += 1;
        }
        out.flush()?;

        info!(
            table = %table_name,
            written = summary.written,
            skipped_deleted = summary.skipped_deleted,
            "SQL export complete"
        );
        Ok(summary)
    }

    fn write_schema<W: Write>(
        &self,
        table: &str,
        fields: &[FieldDescriptor],
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "-- {table} --")?;
        writeln!(out, "--")?;
        match &self.options.source_name {
            Some(source) => writeln!(
                out,
                "-- SQL code with the contents of dbf file {}",
                source.replace(char::is_control, " ")
            )?,
            None => writeln!(out, "-- SQL code with the contents of a dbf file")?,
        }
        writeln!(out)?;
        if self.options.emit_drop_statement {
            writeln!(out, "drop table {table};")?;
            writeln!(out)?;
        }
        writeln!(out, "CREATE TABLE {table}(")?;
        for (i, field) in fields.iter().enumerate() {
            let separator = if i + 1 < fields.len() { "," } else { "" };
            writeln!(
                out,
                "{}\t{}{separator}",
                sql_identifier(&field.name),
                column_type(field)
            )?;
        }
        writeln!(out, ");")?;
        Ok(())
    }
}

/// SQL column type for a field.
#[must_use]
pub fn column_type(field: &FieldDescriptor) -> String {
    match field.kind {
        FieldKind::Character => format!("varchar({})", field.length),
        FieldKind::Numeric if field.length < 10 && field.decimals == 0 => "int".to_string(),
        FieldKind::Numeric | FieldKind::Float | FieldKind::Double => {
            format!("numeric({}, {})", field.length, field.decimals)
        }
        FieldKind::Integer => "int".to_string(),
        FieldKind::Date => "date".to_string(),
        FieldKind::Logical => "boolean".to_string(),
        FieldKind::Memo | FieldKind::Unsupported(_) => {
            let code = if field.type_code.is_ascii_alphanumeric() {
                field.type_char().to_string()
            } else {
                format!("0x{:02X}", field.type_code)
            };
            format!("varchar({}) /* dBASE type {code} */", field.length)
        }
    }
}

/// Reduce `name` to a bare SQL identifier.
///
/// Characters other than ASCII letters, digits and `_` become `_`; a name
/// starting with a digit gets a leading `_`. An empty name falls back to
/// [`DEFAULT_TABLE_NAME`].
#[must_use]
pub fn sql_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() {
        return DEFAULT_TABLE_NAME.to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Escape `\`, `'` and `"` with a backslash.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn sql_literal(kind: FieldKind, value: Option<&str>) -> String {
    let Some(value) = value else {
        return "NULL".to_string();
    };
    match kind {
        FieldKind::Character | FieldKind::Memo | FieldKind::Date | FieldKind::Unsupported(_) => {
            format!("'{}'", escape(value))
        }
        FieldKind::Logical => match value {
            "true" | "false" => value.to_string(),
            _ => "NULL".to_string(),
        },
        FieldKind::Numeric | FieldKind::Float | FieldKind::Integer | FieldKind::Double => {
            if is_numeric_literal(value) {
                value.to_string()
            } else {
                "NULL".to_string()
            }
        }
    }
}

/// Whether `value` is a finite number written only with digits, sign,
/// decimal point and exponent.
fn is_numeric_literal(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && value.parse::<f64>().is_ok_and(f64::is_finite)
}
