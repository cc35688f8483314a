//! Daily XP series aggregation.
//!
//! Groups in-scope transactions by (calendar day, module name) and sums
//! their amounts. Points appear in first-seen key order, which makes the
//! output deterministic for a given input sequence; consumers wanting
//! chronological order call [`DailySeries::sorted_by_date`].

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xpg_types::{path, TransactionRecord};

use crate::diagnostics::Diagnostics;
use crate::timezone::TimezonePolicy;

/// Summed XP for one (calendar day, module) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySeriesPoint {
    pub date: NaiveDate,
    pub module_name: String,
    /// Raw experience points. Display scaling is a separate concern
    /// (see [`crate::summary::scale_for_display`]).
    pub xp_amount: i64,
}

/// The full per-day, per-module XP series.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    points: Vec<DailySeriesPoint>,
}

impl DailySeries {
    /// Build a series from already-filtered transactions.
    ///
    /// `records` is the in-scope subsequence produced by a
    /// [`crate::filter::FilterPolicy`]; records whose timestamp fails to
    /// parse are dropped and counted in `diagnostics`.
    pub fn build<'a, I>(
        records: I,
        module_anchor: &str,
        timezone: TimezonePolicy,
        diagnostics: &mut Diagnostics,
    ) -> Self
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut points: Vec<DailySeriesPoint> = Vec::new();
        let mut index: HashMap<(NaiveDate, String), usize> = HashMap::new();

        for record in records {
            let timestamp = match record.timestamp() {
                Ok(ts) => ts,
                Err(_) => {
                    debug!(created_at = %record.created_at, "dropping record with unparseable timestamp");
                    diagnostics.unparseable_timestamp += 1;
                    continue;
                }
            };
            let date = timezone.calendar_date(timestamp);
            let module = path::module_name(record.path().unwrap_or(""), module_anchor);

            match index.get(&(date, module.clone())) {
                Some(&i) => points[i].xp_amount += record.amount,
                None => {
                    index.insert((date, module.clone()), points.len());
                    points.push(DailySeriesPoint {
                        date,
                        module_name: module,
                        xp_amount: record.amount,
                    });
                }
            }
        }

        Self { points }
    }

    /// Points in first-seen key order.
    pub fn points(&self) -> &[DailySeriesPoint] {
        &self.points
    }

    /// Points sorted chronologically (module name breaks date ties).
    pub fn sorted_by_date(&self) -> Vec<DailySeriesPoint> {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.module_name.cmp(&b.module_name))
        });
        sorted
    }

    /// Per-day totals summed across modules, in first-seen date order.
    ///
    /// This is the shape the original single-line XP chart consumes.
    pub fn combined_by_date(&self) -> Vec<(NaiveDate, i64)> {
        let mut totals: Vec<(NaiveDate, i64)> = Vec::new();
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();
        for point in &self.points {
            match index.get(&point.date) {
                Some(&i) => totals[i].1 += point.xp_amount,
                None => {
                    index.insert(point.date, totals.len());
                    totals.push((point.date, point.xp_amount));
                }
            }
        }
        totals
    }

    /// Sum of all point amounts.
    pub fn total_xp(&self) -> i64 {
        self.points.iter().map(|p| p.xp_amount).sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
