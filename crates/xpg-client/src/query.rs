//! GraphQL documents and response envelopes.
//!
//! Only the fields the aggregator consumes are selected. The combined
//! dashboard query fetches everything in one round trip; the split
//! documents fetch per collection. Both yield the same record shapes.

use serde::{Deserialize, Serialize};
use xpg_types::{AuditRecord, TransactionRecord, UserProfile};

use crate::error::{ClientError, ClientResult};

/// Query documents sent to the GraphQL endpoint.
pub mod queries {
    /// Everything a report needs in one request.
    pub const DASHBOARD: &str = r#"
query {
  user {
    id
    login
    email
    firstName
    lastName
    attrs
    auditRatio
    totalUp
    totalDown
    audits {
      id
      auditedAt
      auditorId
      closureType
      group {
        path
      }
    }
  }
  transaction(where: { type: { _eq: "xp" } }) {
    amount
    type
    createdAt
    path
  }
}"#;

    /// Profile and audits only.
    pub const USER_WITH_AUDITS: &str = r#"
query {
  user {
    id
    login
    email
    firstName
    lastName
    attrs
    auditRatio
    totalUp
    totalDown
    audits {
      id
      auditedAt
      auditorId
      closureType
      group {
        path
      }
    }
  }
}"#;

    /// XP transactions only.
    pub const XP_TRANSACTIONS: &str = r#"
query {
  transaction(where: { type: { _eq: "xp" } }) {
    amount
    type
    createdAt
    path
  }
}"#;
}

/// Request body for the GraphQL endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn dashboard() -> Self {
        Self::new(queries::DASHBOARD)
    }
}

/// Error entry in a GraphQL response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// The payload, or the first reported error.
    pub fn into_data(self) -> ClientResult<T> {
        if let Some(first) = self.errors.first() {
            return Err(ClientError::Graphql(first.message.clone()));
        }
        self.data
            .ok_or_else(|| ClientError::Decode("response carried neither data nor errors".into()))
    }
}

/// One user row from the dashboard query: profile fields plus the
/// nested audit list.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardUser {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub audits: Vec<AuditRecord>,
}

/// Payload of the combined dashboard query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub user: Vec<DashboardUser>,
    #[serde(default)]
    pub transaction: Vec<TransactionRecord>,
}
