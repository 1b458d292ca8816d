//! Little-endian integer normalization.
//!
//! dBASE writes every multi-byte integer least significant byte first. The
//! helpers here turn those bytes into host integers without assuming the
//! host is little-endian: bytes are loaded in host order and then swapped
//! when the host turns out to be big-endian.

use crate::error::{DbfError, Result};

/// Whether the host stores integers most significant byte first.
#[must_use]
pub const fn host_is_big_endian() -> bool {
    cfg!(target_endian = "big")
}

/// Correct a `u16` that was loaded in host order from little-endian storage.
#[must_use]
pub const fn normalize_u16(raw: u16) -> u16 {
    if host_is_big_endian() {
        raw.swap_bytes()
    } else {
        raw
    }
}

/// Correct a `u32` that was loaded in host order from little-endian storage.
#[must_use]
pub const fn normalize_u32(raw: u32) -> u32 {
    if host_is_big_endian() {
        raw.swap_bytes()
    } else {
        raw
    }
}

/// Decode two little-endian bytes.
#[must_use]
pub const fn le_u16(bytes: [u8; 2]) -> u16 {
    normalize_u16(u16::from_ne_bytes(bytes))
}

/// Decode four little-endian bytes.
#[must_use]
pub const fn le_u32(bytes: [u8; 4]) -> u32 {
    normalize_u32(u32::from_ne_bytes(bytes))
}

/// Decode a little-endian `u16` from the start of a slice.
///
/// # Errors
/// Returns `TruncatedInput` when the slice holds fewer than 2 bytes.
pub fn u16_from_le(bytes: &[u8]) -> Result<u16> {
    match bytes {
        [b0, b1, ..] => Ok(le_u16([*b0, *b1])),
        _ => Err(DbfError::truncated("little-endian u16", 0, 2, bytes.len())),
    }
}

/// Decode a little-endian `u32` from the start of a slice.
///
/// # Errors
/// Returns `TruncatedInput` when the slice holds fewer than 4 bytes.
pub fn u32_from_le(bytes: &[u8]) -> Result<u32> {
    match bytes {
        [b0, b1, b2, b3, ..] => Ok(le_u32([*b0, *b1, *b2, *b3])),
        _ => Err(DbfError::truncated("little-endian u32", 0, 4, bytes.len())),
    }
}
