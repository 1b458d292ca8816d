//! Export destinations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use dbf_core::STDIN_PATH;
use dbf_export::DEFAULT_TABLE_NAME;

/// Open `path` for writing; stdout when absent or `-`.
///
/// # Errors
/// Returns an error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) if !is_stdio(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        _ => Ok(Box::new(io::stdout().lock())),
    }
}

/// SQL table name: the output file stem, else the input file stem.
///
/// The stem is returned as is; the SQL exporter reduces it to an identifier.
#[must_use]
pub fn default_table_name(input: &Path, output: Option<&Path>) -> String {
    output
        .filter(|path| !is_stdio(path))
        .or_else(|| (!is_stdio(input)).then_some(input))
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map_or_else(|| DEFAULT_TABLE_NAME.to_string(), str::to_string)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
