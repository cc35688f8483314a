//! Audit outcome distribution.
//!
//! Partitions audits by closure type and expresses each recognized
//! category as a percentage of the recognized total. An empty input
//! yields four explicit zeroes; no division-by-zero artifact can reach
//! a consumer.

use serde::{Deserialize, Serialize};
use tracing::debug;
use xpg_types::{AuditRecord, ClosureType};

use crate::diagnostics::Diagnostics;

/// Percentage share per closure type over the recognized audits.
///
/// When `total_audits > 0` the four percentages sum to 100 (within
/// floating-point tolerance); when it is 0 they are all exactly 0.
/// Records with a missing or unrecognized closure type are excluded
/// from both numerator and denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDistribution {
    pub succeeded: f64,
    pub expired: f64,
    pub reassigned: f64,
    pub unused: f64,
    /// Number of recognized audits the percentages are computed over.
    pub total_audits: u64,
}

impl AuditDistribution {
    /// Compute the distribution over `audits`.
    pub fn from_records(audits: &[AuditRecord], diagnostics: &mut Diagnostics) -> Self {
        let mut counts = [0u64; 4];
        for audit in audits {
            match audit.closure() {
                Some(ClosureType::Succeeded) => counts[0] += 1,
                Some(ClosureType::Expired) => counts[1] += 1,
                Some(ClosureType::Reassigned) => counts[2] += 1,
                Some(ClosureType::Unused) => counts[3] += 1,
                None => {
                    debug!(audit_id = audit.id, "dropping audit with unrecognized closure type");
                    diagnostics.unrecognized_closure += 1;
                }
            }
        }
        Self::from_counts(counts[0], counts[1], counts[2], counts[3])
    }

    /// Distribution from per-category counts.
    pub fn from_counts(succeeded: u64, expired: u64, reassigned: u64, unused: u64) -> Self {
        let total = succeeded + expired + reassigned + unused;
        if total == 0 {
            return Self::default();
        }
        let pct = |count: u64| (count as f64 / total as f64) * 100.0;
        Self {
            succeeded: pct(succeeded),
            expired: pct(expired),
            reassigned: pct(reassigned),
            unused: pct(unused),
            total_audits: total,
        }
    }

    /// Percentage for one closure type.
    pub fn percentage(&self, closure: ClosureType) -> f64 {
        match closure {
            ClosureType::Succeeded => self.succeeded,
            ClosureType::Expired => self.expired,
            ClosureType::Reassigned => self.reassigned,
            ClosureType::Unused => self.unused,
        }
    }

    /// Returns `true` if no recognized audits were seen.
    pub fn is_empty(&self) -> bool {
        self.total_audits == 0
    }
}
