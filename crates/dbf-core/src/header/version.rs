//! dBASE/FoxPro version codes.
//!
//! | Code | Dialect                 | Memo |
//! |------|-------------------------|------|
//! | 0x02 | FoxBase                 | no   |
//! | 0x03 | FoxBase+/dBASE III+     | no   |
//! | 0x83 | FoxBase+/dBASE III+     | yes  |
//! | 0x04 | dBASE IV                | no   |
//! | 0x8B | dBASE IV                | yes  |
//! | 0x8E | dBASE IV with SQL table | yes  |
//! | 0x05 | dBASE 5.0               | no   |
//! | 0x30 | Visual FoxPro           | no   |
//! | 0xF5 | FoxPro 2.0              | yes  |

use std::borrow::Cow;
use std::fmt;

/// Bit 7 of the version byte flags an accompanying memo file.
pub const MEMO_FLAG: u8 = 0x80;

/// Known table dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Dialect {
    FoxBase,
    DBase3,
    DBase3Memo,
    DBase4,
    DBase4Memo,
    DBase4Sql,
    DBase5,
    VisualFoxPro,
    FoxPro2Memo,
}

impl Dialect {
    /// Look up the dialect for a version code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x02 => Some(Self::FoxBase),
            0x03 => Some(Self::DBase3),
            0x83 => Some(Self::DBase3Memo),
            0x04 => Some(Self::DBase4),
            0x8B => Some(Self::DBase4Memo),
            0x8E => Some(Self::DBase4Sql),
            0x05 => Some(Self::DBase5),
            0x30 => Some(Self::VisualFoxPro),
            0xF5 => Some(Self::FoxPro2Memo),
            _ => None,
        }
    }

    /// Version code written for this dialect.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::FoxBase => 0x02,
            Self::DBase3 => 0x03,
            Self::DBase3Memo => 0x83,
            Self::DBase4 => 0x04,
            Self::DBase4Memo => 0x8B,
            Self::DBase4Sql => 0x8E,
            Self::DBase5 => 0x05,
            Self::VisualFoxPro => 0x30,
            Self::FoxPro2Memo => 0xF5,
        }
    }

    /// Human-readable product name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FoxBase => "FoxBase",
            Self::DBase3 | Self::DBase3Memo => "FoxBase+/dBASE III+",
            Self::DBase4 | Self::DBase4Memo => "dBASE IV",
            Self::DBase4Sql => "dBASE IV with SQL table",
            Self::DBase5 => "dBASE 5.0",
            Self::VisualFoxPro => "Visual FoxPro",
            Self::FoxPro2Memo => "FoxPro 2.0",
        }
    }
}

/// Raw version byte of a table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DbfVersion(u8);

impl DbfVersion {
    /// Wrap a version byte.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// The raw version byte.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether bit 7 announces a memo file.
    #[must_use]
    pub const fn has_memo(self) -> bool {
        self.0 & MEMO_FLAG == MEMO_FLAG
    }

    /// Known dialect, if any.
    #[must_use]
    pub const fn dialect(self) -> Option<Dialect> {
        Dialect::from_code(self.0)
    }

    /// Whether the table was written by Visual FoxPro.
    #[must_use]
    pub const fn is_visual_foxpro(self) -> bool {
        matches!(self.dialect(), Some(Dialect::VisualFoxPro))
    }

    /// Product name, or `Unknown (code 0xNN)` for unrecognized codes.
    #[must_use]
    pub fn description(self) -> Cow<'static, str> {
        match self.dialect() {
            Some(dialect) => Cow::Borrowed(dialect.name()),
            None => Cow::Owned(format!("Unknown (code 0x{:02X})", self.0)),
        }
    }
}

impl From<u8> for DbfVersion {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for DbfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
