//! Code page selection from the header's language driver id.
//!
//! DOS OEM code pages other than 866 have no `encoding_rs` decoder; tables
//! tagged with one are decoded as windows-1252, which agrees on ASCII.

use dbf_core::DbfTable;
use encoding_rs::{
    BIG5, EUC_KR, Encoding, GBK, IBM866, MACINTOSH, SHIFT_JIS, WINDOWS_874, WINDOWS_1250,
    WINDOWS_1251, WINDOWS_1252, WINDOWS_1253, WINDOWS_1254, WINDOWS_1255, WINDOWS_1256,
    WINDOWS_1257, X_MAC_CYRILLIC,
};

/// Encoding used when the language driver is unset or unknown.
pub static DEFAULT_ENCODING: &Encoding = WINDOWS_1252;

/// Encoding for a language driver id, `None` when it is not one we decode.
#[must_use]
pub fn known_encoding(ldid: u8) -> Option<&'static Encoding> {
    let encoding = match ldid {
        0x03 | 0x57 | 0x58 | 0x59 => WINDOWS_1252,
        0x04 => MACINTOSH,
        0x26 | 0x65 => IBM866,
        0x78 => BIG5,
        0x79 => EUC_KR,
        0x7A => GBK,
        0x13 | 0x7B => SHIFT_JIS,
        0x7C => WINDOWS_874,
        0x7D => WINDOWS_1255,
        0x7E => WINDOWS_1256,
        0x96 => X_MAC_CYRILLIC,
        0xC8 => WINDOWS_1250,
        0xC9 => WINDOWS_1251,
        0xCA => WINDOWS_1254,
        0xCB => WINDOWS_1253,
        0xCC => WINDOWS_1257,
        _ => return None,
    };
    Some(encoding)
}

/// Encoding for a language driver id, falling back to windows-1252.
#[must_use]
pub fn encoding_for_language_driver(ldid: u8) -> &'static Encoding {
    known_encoding(ldid).unwrap_or(DEFAULT_ENCODING)
}

/// Look up an encoding by WHATWG label such as `cp1251` or `utf-8`.
#[must_use]
pub fn encoding_from_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Encoding to decode `table` with: `preferred` when given, else the one its
/// language driver names.
#[must_use]
pub fn table_encoding<R>(
    table: &DbfTable<R>,
    preferred: Option<&'static Encoding>,
) -> &'static Encoding {
    preferred.unwrap_or_else(|| encoding_for_language_driver(table.header().language_driver))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_drivers() {
        assert_eq!(encoding_for_language_driver(0xC9), WINDOWS_1251);
        assert_eq!(encoding_for_language_driver(0x65), IBM866);
        assert_eq!(encoding_for_language_driver(0x7B), SHIFT_JIS);
    }

    #[test]
    fn test_unknown_driver_falls_back() {
        assert_eq!(known_encoding(0x00), None);
        assert_eq!(encoding_for_language_driver(0x00), WINDOWS_1252);
        assert_eq!(encoding_for_language_driver(0x01), WINDOWS_1252);
    }

    #[test]
    fn test_labels() {
        assert_eq!(encoding_from_label("cp1251"), Some(WINDOWS_1251));
        assert_eq!(encoding_from_label(" UTF-8 "), Some(encoding_rs::UTF_8));
        assert_eq!(encoding_from_label("no-such-encoding"), None);
    }
}
