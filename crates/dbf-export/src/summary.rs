//! Export statistics.

/// Counts reported by an exporter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Records written to the output.
    pub written: u64,
    /// Deleted records left out.
    pub skipped_deleted: u64,
}

impl ExportSummary {
    /// Records read from the table.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.written + self.skipped_deleted
    }
}
