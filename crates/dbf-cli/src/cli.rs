//! CLI argument definitions for `dbf`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dbf",
    version,
    about = "Inspect dBASE/FoxPro tables and convert them to CSV or SQL",
    long_about = "Inspect dBASE/FoxPro tables and convert them to CSV or SQL.\n\n\
                  Reads dBASE III/IV/5, FoxBase, FoxPro and Visual FoxPro .dbf files.\n\
                  Pass - as FILE to read the table from standard input."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show file statistics from the table header.
    Info(InfoArgs),

    /// List the field descriptors.
    Fields(FieldsArgs),

    /// Convert the records to CSV.
    Csv(CsvArgs),

    /// Convert the table to an SQL script.
    Sql(SqlArgs),
}

/// Input file and reader behavior shared by every subcommand.
#[derive(Args)]
pub struct InputArgs {
    /// Table to read, or - for standard input.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reject a header whose length leaves a partial field descriptor.
    #[arg(long = "strict-columns")]
    pub strict_columns: bool,

    /// Fail when field lengths do not add up to the record length.
    #[arg(long = "reject-mismatch")]
    pub reject_mismatch: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print statistics as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct CsvArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: standard output).
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Field delimiter.
    #[arg(long = "delimiter", value_name = "C", default_value = ",")]
    pub delimiter: char,

    /// Also write records flagged as deleted.
    #[arg(long = "include-deleted")]
    pub include_deleted: bool,

    /// Code page of character fields (default: from the language driver).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,
}

#[derive(Args)]
pub struct SqlArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: standard output).
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Table name (default: output or input file stem).
    #[arg(long = "table", value_name = "NAME")]
    pub table: Option<String>,

    /// Trim character fields: none, left, right or both (also n, l, r, b).
    #[arg(long = "trim", value_name = "MODE", default_value = "none")]
    pub trim: String,

    /// Do not emit a drop table statement.
    #[arg(long = "no-drop")]
    pub no_drop: bool,

    /// Also write records flagged as deleted.
    #[arg(long = "include-deleted")]
    pub include_deleted: bool,

    /// Code page of character fields (default: from the language driver).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
