//! Field rendering.
//!
//! Text fields are decoded with the table's code page and trimmed on
//! request. Every other field is whitespace-trimmed, and one that ends up
//! empty renders as `None` so exporters can write NULL.

use std::fmt;
use std::str::FromStr;

use dbf_core::{FieldDescriptor, FieldKind};
use encoding_rs::Encoding;

use crate::error::ExportError;

/// Which side of a character field to strip spaces from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrimMode {
    /// Keep the padding.
    #[default]
    None,
    /// Strip leading spaces.
    Left,
    /// Strip trailing spaces.
    Right,
    /// Strip both sides.
    Both,
}

impl TrimMode {
    #[must_use]
    pub fn trims_left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    #[must_use]
    pub fn trims_right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }

    /// Apply the mode to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> &str {
        let text = if self.trims_left() {
            text.trim_start_matches(' ')
        } else {
            text
        };
        if self.trims_right() {
            text.trim_end_matches(' ')
        } else {
            text
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for TrimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrimMode {
    type Err = ExportError;

    /// Accepts full names and the one-letter forms `n`, `l`, `r`, `b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "n" => Ok(Self::None),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "both" | "b" => Ok(Self::Both),
            _ => Err(ExportError::InvalidTrimMode(s.to_string())),
        }
    }
}

/// Drop the NUL bytes some writers pad fields with.
#[must_use]
pub fn strip_nul_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    &bytes[..end]
}

/// Render a field's bytes as text, `None` for an empty non-character value.
///
/// `trim` only applies to character and memo fields.
#[must_use]
pub fn render_field(
    bytes: &[u8],
    field: &FieldDescriptor,
    trim: TrimMode,
    encoding: &'static Encoding,
) -> Option<String> {
    match field.kind {
        FieldKind::Character | FieldKind::Memo => {
            let (text, _, _) = encoding.decode(strip_nul_padding(bytes));
            Some(trim.apply(&text).to_string())
        }
        FieldKind::Integer => {
            let raw: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
            Some(i32::from_le_bytes(raw).to_string())
        }
        FieldKind::Double => {
            let raw: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
            let value = f64::from_le_bytes(raw);
            Some(format!("{value:.*}", usize::from(field.decimals)))
        }
        FieldKind::Logical => {
            let text = trimmed_text(bytes, encoding)?;
            Some(text.starts_with(['T', 't', 'Y', 'y']).to_string())
        }
        FieldKind::Numeric | FieldKind::Float | FieldKind::Date | FieldKind::Unsupported(_) => {
            trimmed_text(bytes, encoding)
        }
    }
}

fn trimmed_text(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (text, _, _) = encoding.decode(strip_nul_padding(bytes));
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
