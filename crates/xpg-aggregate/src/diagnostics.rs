//! Counters for records dropped during aggregation.

use serde::{Deserialize, Serialize};

/// Tally of records excluded from the derived structures.
///
/// Aggregation never fails on malformed data; it drops the offending
/// record and increments the matching counter here so callers can
/// surface data-quality problems without aborting a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// XP transactions with no `path` field.
    pub missing_path: u64,
    /// In-scope transactions whose `createdAt` failed to parse.
    pub unparseable_timestamp: u64,
    /// Audits with a missing or unrecognized closure type.
    pub unrecognized_closure: u64,
}

impl Diagnostics {
    /// Returns `true` if no records were dropped.
    pub fn is_clean(&self) -> bool {
        self.total_dropped() == 0
    }

    /// Total number of dropped records across all categories.
    pub fn total_dropped(&self) -> u64 {
        self.missing_path + self.unparseable_timestamp + self.unrecognized_closure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clean() {
        let diag = Diagnostics::default();
        assert!(diag.is_clean());
        assert_eq!(diag.total_dropped(), 0);
    }

    #[test]
    fn any_counter_marks_dirty() {
        let diag = Diagnostics {
            unparseable_timestamp: 1,
            ..Default::default()
        };
        assert!(!diag.is_clean());
        assert_eq!(diag.total_dropped(), 1);
    }
}
