use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown closure type: {0:?}")]
    UnknownClosureType(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}
