//! API-client collaborator for xpgraph.
//!
//! The aggregator in `xpg-aggregate` knows nothing about HTTP; this
//! crate owns everything between it and the platform API: credential
//! encoding for signin, the explicit bearer-token [`Session`] (never
//! ambient state), the GraphQL documents and response envelopes, and
//! the [`ApiTransport`] trait behind which an actual HTTP client lives.
//!
//! Records can be fetched with one combined dashboard query or with
//! separate per-collection queries; both produce the same [`RecordSet`].

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod query;
pub mod session;
pub mod transport;

pub use auth::Credentials;
pub use client::{DashboardClient, RecordSet};
pub use endpoint::{endpoints, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use query::{queries, DashboardData, GraphqlRequest, GraphqlResponse};
pub use session::Session;
pub use transport::{ApiTransport, StaticTransport};
