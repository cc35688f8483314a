//! Transaction filter policies.
//!
//! Two policies are observed in the platform's own dashboards and both
//! are supported as data, not hard-coded behavior: keep everything under
//! a path prefix, or keep everything except paths matching exclusion
//! substrings (used to drop the onboarding track from reports).
//!
//! Every policy additionally requires `kind == "xp"`, so the in-scope
//! rule is the same for the charted series and the total-XP figure. A
//! record with no path never matches any policy.

use serde::{Deserialize, Serialize};
use xpg_types::{path, TransactionRecord};

use crate::error::AggregateError;

/// Which transactions are in scope for XP reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPolicy {
    /// Keep every XP transaction that carries a path.
    #[default]
    KeepAll,
    /// Keep XP transactions whose path starts with this prefix.
    Prefix(String),
    /// Keep XP transactions whose path matches none of these substrings.
    Exclude(Vec<String>),
}

impl FilterPolicy {
    /// Prefix policy, rejecting an empty prefix.
    pub fn prefix(prefix: impl Into<String>) -> Result<Self, AggregateError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(AggregateError::EmptyPrefix);
        }
        Ok(Self::Prefix(prefix))
    }

    /// Exclusion policy, rejecting empty patterns (an empty substring
    /// matches every path and would exclude everything).
    pub fn exclude(patterns: Vec<String>) -> Result<Self, AggregateError> {
        if patterns.iter().any(|p| p.is_empty()) {
            return Err(AggregateError::EmptyPattern);
        }
        Ok(Self::Exclude(patterns))
    }

    /// Returns `true` if the record is in scope under this policy.
    ///
    /// Pure and total: non-XP records and records without a path are
    /// excluded, never an error.
    pub fn keeps(&self, record: &TransactionRecord) -> bool {
        if !record.is_xp() {
            return false;
        }
        let Some(path) = record.path() else {
            return false;
        };
        match self {
            Self::KeepAll => true,
            Self::Prefix(prefix) => path::matches_prefix(path, prefix),
            Self::Exclude(patterns) => !path::matches_any_substring(path, patterns),
        }
    }

    /// The in-scope subsequence of `records`, in input order.
    pub fn filter<'a>(&self, records: &'a [TransactionRecord]) -> Vec<&'a TransactionRecord> {
        records.iter().filter(|r| self.keeps(r)).collect()
    }
}
