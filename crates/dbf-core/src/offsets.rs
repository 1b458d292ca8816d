//! Record layout computation.
//!
//! Byte 0 of every record is the deletion flag, so user data starts at
//! offset 1 and each field follows the previous one without gaps.

use crate::error::DbfError;
use crate::header::FieldDescriptor;

/// Offset of the first field in a record.
pub const FIRST_FIELD_OFFSET: usize = 1;

/// Assign each field its offset as the running sum of preceding lengths.
pub fn compute_offsets(fields: &mut [FieldDescriptor]) {
    let mut offset = FIRST_FIELD_OFFSET;
    for field in fields {
        field.offset = offset;
        offset += usize::from(field.length);
    }
}

/// Bytes a record needs for `fields`: the deletion flag plus every field.
#[must_use]
pub fn record_span(fields: &[FieldDescriptor]) -> u64 {
    fields
        .iter()
        .map(|field| u64::from(field.length))
        .sum::<u64>()
        + FIRST_FIELD_OFFSET as u64
}

/// Disagreement between the declared record length and the field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaMismatch {
    /// Record length from the header.
    pub declared: u16,
    /// Bytes spanned by the deletion flag and all fields.
    pub computed: u64,
}

impl From<SchemaMismatch> for DbfError {
    fn from(mismatch: SchemaMismatch) -> Self {
        Self::SchemaMismatch {
            declared: mismatch.declared,
            computed: mismatch.computed,
        }
    }
}

/// Compare the field layout against the declared record length.
#[must_use]
pub fn check_record_span(fields: &[FieldDescriptor], record_length: u16) -> Option<SchemaMismatch> {
    let computed = record_span(fields);
    (computed != u64::from(record_length)).then_some(SchemaMismatch {
        declared: record_length,
        computed,
    })
}
