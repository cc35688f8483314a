//! Summary statistics and display scaling.
//!
//! Total XP sums over the same filtered subsequence as the daily series,
//! so the headline figure and the chart always agree. Aggregation works
//! in raw points; the kilobyte-style display scale lives here, on the
//! presentation side of the boundary.

use serde::{Deserialize, Serialize};
use xpg_types::{TransactionRecord, UserProfile};

use crate::filter::FilterPolicy;

/// Divisor applied when presenting XP amounts in "kB" units.
pub const XP_KILO_SCALE: f64 = 1000.0;

/// Scale a raw XP amount for display.
pub fn scale_for_display(amount: i64) -> f64 {
    amount as f64 / XP_KILO_SCALE
}

/// Total XP over the in-scope transactions.
pub fn total_xp(records: &[TransactionRecord], policy: &FilterPolicy) -> i64 {
    records
        .iter()
        .filter(|r| policy.keeps(r))
        .map(|r| r.amount)
        .sum()
}

/// The statistics-panel fields of a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub login: String,
    pub full_name: String,
    pub email: Option<String>,
    pub audit_ratio: f64,
    pub total_up: i64,
    pub total_down: i64,
    /// Raw XP over the in-scope transactions.
    pub total_xp: i64,
}

impl ProfileSummary {
    /// Assemble the summary from a profile and a precomputed total.
    pub fn build(profile: &UserProfile, total_xp: i64) -> Self {
        Self {
            login: profile.login.clone(),
            full_name: profile.full_name(),
            email: profile.email.clone(),
            audit_ratio: profile.audit_ratio,
            total_up: profile.total_up,
            total_down: profile.total_down,
            total_xp,
        }
    }

    /// Total XP in display units.
    pub fn total_xp_display(&self) -> f64 {
        scale_for_display(self.total_xp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: i64, kind: &str, path: &str) -> TransactionRecord {
        TransactionRecord {
            amount,
            kind: kind.into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            path: Some(path.into()),
        }
    }

    #[test]
    fn total_xp_respects_the_filter() {
        let records = vec![
            tx(100, "xp", "/r/bh-module/alpha"),
            tx(900, "xp", "/r/other/alpha"),
            tx(50, "level", "/r/bh-module/alpha"),
        ];
        let policy = FilterPolicy::prefix("/r/bh-module").unwrap();
        assert_eq!(total_xp(&records, &policy), 100);
    }

    #[test]
    fn scaling_is_presentation_only() {
        assert_eq!(scale_for_display(150_500), 150.5);
        assert_eq!(scale_for_display(0), 0.0);
    }

    #[test]
    fn summary_carries_profile_fields() {
        let profile = UserProfile {
            login: "jdoe".into(),
            first_name: Some("Jay".into()),
            last_name: Some("Doe".into()),
            audit_ratio: 1.4,
            total_up: 700_000,
            total_down: 500_000,
            ..Default::default()
        };
        let summary = ProfileSummary::build(&profile, 250_000);
        assert_eq!(summary.full_name, "Jay Doe");
        assert_eq!(summary.total_xp, 250_000);
        assert_eq!(summary.total_xp_display(), 250.0);
    }
}
