//! Field kinds resolved from descriptor type codes.

use std::fmt;

use crate::header::DbfVersion;

/// Interpretation of a field's bytes, fixed once per descriptor.
///
/// Type codes mean different things across dialects; `B` is an 8-byte
/// double in Visual FoxPro and a binary memo reference elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldKind {
    /// `C`: space-padded text.
    Character,
    /// `N`: right-justified ASCII number.
    Numeric,
    /// `F`: ASCII floating point number.
    Float,
    /// `D`: `YYYYMMDD` text.
    Date,
    /// `L`: one of `TtYyFfNn?`.
    Logical,
    /// `M`, `G`, `P`, and `B` outside Visual FoxPro: block reference into the memo file.
    Memo,
    /// `I`: 4-byte little-endian integer.
    Integer,
    /// `B` in Visual FoxPro: 8-byte little-endian IEEE double.
    Double,
    /// Any other type code.
    Unsupported(u8),
}

impl FieldKind {
    /// Resolve a type code for the given table version.
    #[must_use]
    pub fn resolve(type_code: u8, version: DbfVersion) -> Self {
        match type_code {
            b'C' => Self::Character,
            b'N' => Self::Numeric,
            b'F' => Self::Float,
            b'D' => Self::Date,
            b'L' => Self::Logical,
            b'M' | b'G' | b'P' => Self::Memo,
            b'I' => Self::Integer,
            b'B' if version.is_visual_foxpro() => Self::Double,
            b'B' => Self::Memo,
            other => Self::Unsupported(other),
        }
    }

    /// Whether the stored bytes are text.
    #[must_use]
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            Self::Character | Self::Numeric | Self::Float | Self::Date | Self::Logical
        )
    }

    /// Whether the value lives in the memo file.
    #[must_use]
    pub fn is_memo(self) -> bool {
        matches!(self, Self::Memo)
    }

    /// Short name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Numeric => "numeric",
            Self::Float => "float",
            Self::Date => "date",
            Self::Logical => "logical",
            Self::Memo => "memo",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(code) if code.is_ascii_graphic() => {
                write!(f, "unsupported ({})", char::from(*code))
            }
            Self::Unsupported(code) => write!(f, "unsupported (0x{code:02X})"),
            other => f.write_str(other.name()),
        }
    }
}
