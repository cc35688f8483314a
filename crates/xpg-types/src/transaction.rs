//! XP transaction records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Record kind marking an experience-point transaction.
pub const XP_KIND: &str = "xp";

/// One transaction as returned by the platform API.
///
/// The timestamp is kept as the raw wire string and parsed on demand:
/// a record with an unparseable `createdAt` must drop out of date-keyed
/// aggregation without failing the batch it arrived in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Experience points. The platform reports raw points; display
    /// layers may scale them down (see `xpg-aggregate`).
    pub amount: i64,
    /// Transaction kind; only `"xp"` records are in scope for reports.
    #[serde(rename = "type")]
    pub kind: String,
    /// RFC 3339 timestamp, unparsed.
    pub created_at: String,
    /// Hierarchical record path, e.g. `/bahrain/bh-module/graphql`.
    /// Absent on malformed records.
    #[serde(default)]
    pub path: Option<String>,
}

impl TransactionRecord {
    /// Returns `true` if this is an experience-point transaction.
    pub fn is_xp(&self) -> bool {
        self.kind == XP_KIND
    }

    /// Parse the creation timestamp.
    pub fn timestamp(&self) -> Result<DateTime<FixedOffset>, TypeError> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|_| TypeError::InvalidTimestamp(self.created_at.clone()))
    }

    /// The record path, or `None` when the field was missing.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
