//! Parsing statistics and result structures for catalog tables

use std::collections::BTreeMap;

/// Records for one category with statistics
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Records keyed by derived identifier
    pub records: BTreeMap<String, T>,

    pub stats: ParseStats,
}

/// Per-category parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data rows encountered
    pub rows_read: usize,

    /// Number of blank rows ignored
    pub rows_skipped: usize,

    /// Number of records started, duplicates included
    pub records_created: usize,

    /// Number of size variants written (pipes and valves only)
    pub size_variants: usize,

    /// Identifiers that replaced an earlier record with the same identifier
    pub duplicate_identifiers: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that `uid` overwrote an earlier record
    pub fn record_duplicate(&mut self, uid: &str) {
        self.duplicate_identifiers.push(uid.to_string());
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_identifiers.is_empty()
    }
}
