//! Core aggregation for xpgraph.
//!
//! This crate is the heart of xpgraph. Given already-fetched transaction
//! and audit collections, it produces the three chart-ready structures
//! consumed by reports:
//!
//! - A per-day, per-module XP series ([`DailySeries`])
//! - An audit outcome distribution over the four closure types
//!   ([`AuditDistribution`])
//! - A scalar total-XP figure, consistent with the charted series
//!
//! Aggregation is a pure, synchronous transformation: it never fails on
//! record data. Malformed records (missing path, unparseable timestamp,
//! unrecognized closure type) are dropped from the derived structures and
//! tallied in [`Diagnostics`]. The only fallible surface is configuration
//! parsing ([`AggregateError`]).
//!
//! The filter policy applies uniformly to the daily series and the total,
//! and calendar days are derived through an explicit [`TimezonePolicy`]
//! (UTC by default) rather than the ambient local timezone.

pub mod aggregator;
pub mod diagnostics;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod series;
pub mod summary;
pub mod timezone;

pub use aggregator::{AggregateOutput, Aggregator, AggregatorConfig};
pub use diagnostics::Diagnostics;
pub use distribution::AuditDistribution;
pub use error::AggregateError;
pub use filter::FilterPolicy;
pub use series::{DailySeries, DailySeriesPoint};
pub use summary::{scale_for_display, ProfileSummary, XP_KILO_SCALE};
pub use timezone::TimezonePolicy;
