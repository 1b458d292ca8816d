//! Reader options.

/// How a header length that does not divide into whole descriptors is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnCountMode {
    /// Floor the descriptor count and ignore the trailing partial descriptor.
    #[default]
    Permissive,
    /// Reject the table with `InvalidSchema`.
    Strict,
}

/// What to do when field lengths do not add up to the record length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaMismatchPolicy {
    /// Log a warning and keep the table open.
    #[default]
    Warn,
    /// Fail the open with `SchemaMismatch`.
    Reject,
}

/// Options for opening dBASE tables.
#[derive(Debug, Clone, Default)]
pub struct DbfReaderOptions {
    /// Column count derivation mode (default: permissive).
    pub column_count: ColumnCountMode,
    /// Schema mismatch policy (default: warn).
    pub schema_mismatch: SchemaMismatchPolicy,
}

impl DbfReaderOptions {
    /// Create reader options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject partial descriptors and schema mismatches.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.column_count = ColumnCountMode::Strict;
        self.schema_mismatch = SchemaMismatchPolicy::Reject;
        self
    }

    /// Set the column count mode.
    #[must_use]
    pub fn with_column_count_mode(mut self, mode: ColumnCountMode) -> Self {
        self.column_count = mode;
        self
    }

    /// Set the schema mismatch policy.
    #[must_use]
    pub fn with_schema_mismatch_policy(mut self, policy: SchemaMismatchPolicy) -> Self {
        self.schema_mismatch = policy;
        self
    }
}
