use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use dbf_cli::info::TableInfo;
use dbf_cli::output::{default_table_name, open_output};
use dbf_core::{ColumnCountMode, DbfReaderOptions, DbfSource, DbfTable, SchemaMismatchPolicy};
use dbf_export::{CsvExporter, CsvOptions, SqlExporter, SqlOptions, TrimMode, encoding_from_label};
use encoding_rs::Encoding;

use crate::cli::{CsvArgs, FieldsArgs, InfoArgs, InputArgs, SqlArgs};
use crate::summary::{print_fields, print_info};

pub fn run_info(args: &InfoArgs) -> Result<()> {
    let table = open_table(&args.input)?;
    let info = TableInfo::from_table(&source_name(&args.input.file), &table);
    if args.json {
        let json = serde_json::to_string_pretty(&info).context("serialize table info")?;
        println!("{json}");
    } else {
        print_info(&info);
    }
    table.close().context("close table")?;
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let table = open_table(&args.input)?;
    print_fields(table.fields());
    table.close().context("close table")?;
    Ok(())
}

pub fn run_csv(args: &CsvArgs) -> Result<()> {
    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter must be a single ASCII character"))?;
    let mut options = CsvOptions::new()
        .with_delimiter(delimiter)
        .include_deleted(args.include_deleted);
    if let Some(encoding) = parse_encoding(args.encoding.as_deref())? {
        options = options.with_encoding(encoding);
    }

    let span = info_span!("csv", file = %args.input.file.display());
    let _guard = span.enter();
    let mut table = open_table(&args.input)?;
    let mut out = open_output(args.output.as_deref()).context("open output")?;
    let summary = CsvExporter::new(options)
        .export(&mut table, &mut out)
        .context("export CSV")?;
    out.flush().context("flush output")?;
    table.close().context("close table")?;
    info!(records = summary.written, "done");
    Ok(())
}

pub fn run_sql(args: &SqlArgs) -> Result<()> {
    let trim: TrimMode = args.trim.parse()?;
    let table_name = args
        .table
        .clone()
        .unwrap_or_else(|| default_table_name(&args.input.file, args.output.as_deref()));
    let mut options = SqlOptions::new(table_name)
        .with_trim(trim)
        .include_deleted(args.include_deleted)
        .with_source_name(source_name(&args.input.file));
    if args.no_drop {
        options = options.without_drop();
    }
    if let Some(encoding) = parse_encoding(args.encoding.as_deref())? {
        options = options.with_encoding(encoding);
    }

    let span = info_span!("sql", file = %args.input.file.display());
    let _guard = span.enter();
    let mut table = open_table(&args.input)?;
    let mut out = open_output(args.output.as_deref()).context("open output")?;
    let summary = SqlExporter::new(options)
        .export(&mut table, &mut out)
        .context("export SQL")?;
    out.flush().context("flush output")?;
    table.close().context("close table")?;
    info!(records = summary.written, "done");
    Ok(())
}

fn open_table(input: &InputArgs) -> Result<DbfTable<DbfSource>> {
    let options = reader_options(input);
    DbfTable::open_with_options(&input.file, &options)
        .with_context(|| format!("open {}", source_name(&input.file)))
}

fn reader_options(input: &InputArgs) -> DbfReaderOptions {
    let column_count = if input.strict_columns {
        ColumnCountMode::Strict
    } else {
        ColumnCountMode::Permissive
    };
    let schema_mismatch = if input.reject_mismatch {
        SchemaMismatchPolicy::Reject
    } else {
        SchemaMismatchPolicy::Warn
    };
    DbfReaderOptions::new()
        .with_column_count_mode(column_count)
        .with_schema_mismatch_policy(schema_mismatch)
}

fn parse_encoding(label: Option<&str>) -> Result<Option<&'static Encoding>> {
    let Some(label) = label else {
        return Ok(None);
    };
    match encoding_from_label(label) {
        Some(encoding) => Ok(Some(encoding)),
        None => bail!("unknown encoding '{label}'"),
    }
}

fn source_name(path: &Path) -> String {
    if path.as_os_str() == dbf_core::STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
