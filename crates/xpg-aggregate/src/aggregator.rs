//! One-pass aggregation façade.

use serde::{Deserialize, Serialize};
use tracing::debug;
use xpg_types::{AuditRecord, TransactionRecord, DEFAULT_MODULE_ANCHOR};

use crate::diagnostics::Diagnostics;
use crate::distribution::AuditDistribution;
use crate::filter::FilterPolicy;
use crate::series::DailySeries;
use crate::timezone::TimezonePolicy;

/// Aggregator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Which transactions are in scope, for both series and total.
    pub filter: FilterPolicy,
    /// Timezone used to truncate timestamps to calendar days.
    pub timezone: TimezonePolicy,
    /// Path segment after which the module name is read.
    pub module_anchor: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            filter: FilterPolicy::default(),
            timezone: TimezonePolicy::default(),
            module_anchor: DEFAULT_MODULE_ANCHOR.to_string(),
        }
    }
}

/// Everything a report needs, derived in one call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOutput {
    pub series: DailySeries,
    pub distribution: AuditDistribution,
    /// Raw XP over the same filtered subsequence as `series`.
    pub total_xp: i64,
    pub diagnostics: Diagnostics,
}

/// The XP/Audit aggregator.
///
/// Pure and synchronous: both input collections must be fully
/// materialized before [`Aggregator::aggregate`] runs, and the same
/// inputs always produce the same output, entry for entry.
#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Derive the series, distribution, and total from raw records.
    ///
    /// Never fails: malformed records are dropped and tallied in the
    /// output's [`Diagnostics`].
    pub fn aggregate(
        &self,
        transactions: &[TransactionRecord],
        audits: &[AuditRecord],
    ) -> AggregateOutput {
        let mut diagnostics = Diagnostics::default();

        // XP records that carry no path cannot match any policy; count
        // them before filtering so the drop is visible.
        for record in transactions {
            if record.is_xp() && record.path().is_none() {
                debug!(amount = record.amount, "dropping xp record with no path");
                diagnostics.missing_path += 1;
            }
        }

        let in_scope = self.config.filter.filter(transactions);
        let total_xp: i64 = in_scope.iter().map(|r| r.amount).sum();
        let series = DailySeries::build(
            in_scope.iter().copied(),
            &self.config.module_anchor,
            self.config.timezone,
            &mut diagnostics,
        );
        let distribution = AuditDistribution::from_records(audits, &mut diagnostics);

        AggregateOutput {
            series,
            distribution,
            total_xp,
            diagnostics,
        }
    }
}

impl From<AggregatorConfig> for Aggregator {
    fn from(config: AggregatorConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use xpg_types::ClosureType;

    fn tx(amount: i64, created_at: &str, path: Option<&str>) -> TransactionRecord {
        TransactionRecord {
            amount,
            kind: "xp".into(),
            created_at: created_at.into(),
            path: path.map(String::from),
        }
    }

    fn audit(id: i64, closure: &str) -> AuditRecord {
        AuditRecord {
            id,
            audited_at: "2024-02-01T09:00:00Z".into(),
            auditor_id: 1,
            closure_type: Some(closure.into()),
            group: None,
        }
    }

    fn prefix_aggregator(prefix: &str) -> Aggregator {
        Aggregator::new(AggregatorConfig {
            filter: FilterPolicy::prefix(prefix).unwrap(),
            ..Default::default()
        })
    }

    #[test]
    fn scenario_a_same_day_module_sums() {
        let transactions = vec![
            tx(100, "2024-01-01T10:00:00Z", Some("/r/bh-module/alpha/x")),
            tx(50, "2024-01-01T12:00:00Z", Some("/r/bh-module/alpha/y")),
        ];
        let output = Aggregator::default().aggregate(&transactions, &[]);
        assert_eq!(output.series.len(), 1);
        let point = &output.series.points()[0];
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(point.module_name, "alpha");
        assert_eq!(point.xp_amount, 150);
    }

    #[test]
    fn scenario_b_audit_percentages() {
        let audits = vec![
            audit(1, "succeeded"),
            audit(2, "succeeded"),
            audit(3, "expired"),
            audit(4, "unused"),
        ];
        let output = Aggregator::default().aggregate(&[], &audits);
        assert_eq!(output.distribution.succeeded, 50.0);
        assert_eq!(output.distribution.expired, 25.0);
        assert_eq!(output.distribution.unused, 25.0);
        assert_eq!(output.distribution.reassigned, 0.0);
    }

    #[test]
    fn scenario_c_empty_audits_yield_zeroes() {
        let output = Aggregator::default().aggregate(&[], &[]);
        for closure in ClosureType::ALL {
            assert_eq!(output.distribution.percentage(closure), 0.0);
        }
        assert!(output.distribution.percentage(ClosureType::Succeeded).is_finite());
    }

    #[test]
    fn scenario_d_prefix_excludes_from_series_and_total() {
        let transactions = vec![
            tx(100, "2024-01-01T10:00:00Z", Some("/r/bh-module/alpha")),
            tx(999, "2024-01-01T10:00:00Z", Some("/r/other/alpha")),
        ];
        let output = prefix_aggregator("/r/bh-module").aggregate(&transactions, &[]);
        assert_eq!(output.total_xp, 100);
        assert_eq!(output.series.total_xp(), 100);
    }

    #[test]
    fn total_and_series_agree_under_any_policy() {
        let transactions = vec![
            tx(10, "2024-01-01T10:00:00Z", Some("/r/bh-module/alpha")),
            tx(20, "2024-01-02T10:00:00Z", Some("/r/bh-module/beta")),
            tx(30, "2024-01-02T10:00:00Z", Some("/r/piscine-go/x")),
        ];
        let aggregator = Aggregator::new(AggregatorConfig {
            filter: FilterPolicy::exclude(vec!["piscine".into()]).unwrap(),
            ..Default::default()
        });
        let output = aggregator.aggregate(&transactions, &[]);
        assert_eq!(output.total_xp, 30);
        assert_eq!(output.series.total_xp(), output.total_xp);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let transactions = vec![
            tx(10, "2024-01-01T10:00:00Z", Some("/r/bh-module/alpha")),
            tx(20, "bogus", Some("/r/bh-module/alpha")),
            tx(5, "2024-01-03T10:00:00Z", None),
        ];
        let audits = vec![audit(1, "succeeded"), audit(2, "vanished")];
        let aggregator = Aggregator::default();
        let first = aggregator.aggregate(&transactions, &audits);
        let second = aggregator.aggregate(&transactions, &audits);
        assert_eq!(first, second);
    }

    #[test]
    fn diagnostics_cover_all_drop_reasons() {
        let transactions = vec![
            tx(10, "2024-01-01T10:00:00Z", Some("/r/bh-module/alpha")),
            tx(20, "bogus", Some("/r/bh-module/alpha")),
            tx(5, "2024-01-03T10:00:00Z", None),
        ];
        let audits = vec![audit(1, "succeeded"), audit(2, "vanished")];
        let output = Aggregator::default().aggregate(&transactions, &audits);
        assert_eq!(output.diagnostics.missing_path, 1);
        assert_eq!(output.diagnostics.unparseable_timestamp, 1);
        assert_eq!(output.diagnostics.unrecognized_closure, 1);
        assert_eq!(output.diagnostics.total_dropped(), 3);
    }

    #[test]
    fn timezone_shifts_the_series_day() {
        let transactions = vec![tx(10, "2024-01-01T23:30:00Z", Some("/r/bh-module/alpha"))];
        let aggregator = Aggregator::new(AggregatorConfig {
            timezone: TimezonePolicy::fixed(3 * 3600).unwrap(),
            ..Default::default()
        });
        let output = aggregator.aggregate(&transactions, &[]);
        assert_eq!(
            output.series.points()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }
}
