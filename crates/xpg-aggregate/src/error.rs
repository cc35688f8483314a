use thiserror::Error;

/// Errors produced by aggregator configuration.
///
/// Aggregation over record data is total and never fails; only building
/// a configuration from untrusted input (CLI flags, config files) can
/// reject.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("invalid timezone {input:?}: {reason}")]
    InvalidTimezone { input: String, reason: String },

    #[error("filter prefix must not be empty")]
    EmptyPrefix,

    #[error("exclusion pattern must not be empty")]
    EmptyPattern,
}
