//! Foundation types for xpgraph.
//!
//! This crate provides the raw record shapes delivered by the learning
//! platform API and the path helpers shared by every other xpgraph crate.
//! Records are deliberately lenient: fields that arrive malformed or
//! missing are represented as such (`Option`, raw timestamp strings)
//! rather than rejected at deserialization time, so downstream consumers
//! can drop individual records instead of failing a whole batch.
//!
//! # Key Types
//!
//! - [`TransactionRecord`] — One XP transaction as returned by the API
//! - [`AuditRecord`] / [`ClosureType`] — Audit outcomes over four categories
//! - [`UserProfile`] — Profile panel fields consumed by reports
//! - [`path`] — Hierarchical record-path helpers (prefix match, module name)

pub mod audit;
pub mod error;
pub mod path;
pub mod profile;
pub mod transaction;

pub use audit::{AuditGroup, AuditRecord, ClosureType};
pub use error::TypeError;
pub use path::{module_name, DEFAULT_MODULE_ANCHOR, UNKNOWN_MODULE};
pub use profile::UserProfile;
pub use transaction::TransactionRecord;
