//! Input streams a table can be read from.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{DbfError, Result};

/// Path placeholder that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Stream behind a table opened by path.
///
/// Standard input cannot seek, so it is buffered in memory when opened.
#[derive(Debug)]
pub enum DbfSource {
    /// A file opened read-only.
    File(File),
    /// Standard input, fully buffered.
    Stdin(Cursor<Vec<u8>>),
}

impl DbfSource {
    /// Open `path`, or standard input when `path` is `-`.
    ///
    /// # Errors
    /// `FileNotFound` when the file does not exist, `Io` for other failures.
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            return Self::stdin();
        }
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DbfError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DbfError::Io(e)
            }
        })?;
        Ok(Self::File(file))
    }

    /// Buffer all of standard input.
    ///
    /// # Errors
    /// Returns `Io` if standard input cannot be read.
    pub fn stdin() -> Result<Self> {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        Ok(Self::Stdin(Cursor::new(data)))
    }

    /// Whether this source is standard input.
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin(_))
    }
}

impl Read for DbfSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Stdin(cursor) => cursor.read(buf),
        }
    }
}

impl Seek for DbfSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Self::File(file) => file.seek(pos),
            Self::Stdin(cursor) => cursor.seek(pos),
        }
    }
}

/// Read until `buf` is full or the stream ends; returns the bytes read.
///
/// Unlike `read_exact`, a short stream is not an error here so callers can
/// report exactly how many bytes were available.
pub(crate) fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
