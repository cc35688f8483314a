//! Calendar-day derivation policy.
//!
//! The platform timestamps records in RFC 3339 with an offset; which
//! calendar day a record lands on depends on the timezone the day is
//! computed in. Deriving it from the execution environment's local
//! timezone makes reports differ between machines, so the policy is an
//! explicit value: UTC unless a fixed offset is configured.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AggregateError;

const MAX_OFFSET_SECS: i32 = 24 * 3600;

/// Timezone used to truncate timestamps to calendar days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimezonePolicy {
    /// Truncate in UTC (the default).
    #[default]
    Utc,
    /// Truncate at a fixed offset, in seconds east of UTC.
    Fixed(i32),
}

impl TimezonePolicy {
    /// Fixed-offset policy from seconds east of UTC.
    pub fn fixed(offset_secs: i32) -> Result<Self, AggregateError> {
        if offset_secs.abs() >= MAX_OFFSET_SECS {
            return Err(AggregateError::InvalidTimezone {
                input: offset_secs.to_string(),
                reason: "offset must be within ±24h".into(),
            });
        }
        Ok(Self::Fixed(offset_secs))
    }

    /// The calendar day of `timestamp` under this policy.
    pub fn calendar_date(&self, timestamp: DateTime<FixedOffset>) -> NaiveDate {
        let offset_secs = match self {
            Self::Utc => 0,
            Self::Fixed(secs) => *secs,
        };
        // Range-checked at construction; clamp in case a Fixed value was
        // built directly with an out-of-range offset.
        let offset_secs = offset_secs.clamp(-MAX_OFFSET_SECS + 1, MAX_OFFSET_SECS - 1);
        let offset = FixedOffset::east_opt(offset_secs).expect("offset within ±24h");
        timestamp.with_timezone(&offset).date_naive()
    }
}

impl FromStr for TimezonePolicy {
    type Err = AggregateError;

    /// Parse `"utc"`, `"Z"`, or a `±HH:MM` offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(Self::Utc);
        }
        let invalid = |reason: &str| AggregateError::InvalidTimezone {
            input: s.to_string(),
            reason: reason.into(),
        };

        let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (-1, rest)
        } else {
            return Err(invalid("expected 'utc' or ±HH:MM"));
        };
        let (hours, minutes) = rest
            .split_once(':')
            .ok_or_else(|| invalid("expected 'utc' or ±HH:MM"))?;
        let hours: i32 = hours.parse().map_err(|_| invalid("bad hours"))?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid("bad minutes"))?;
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(invalid("offset out of range"));
        }
        Self::fixed(sign * (hours * 3600 + minutes * 60))
    }
}
