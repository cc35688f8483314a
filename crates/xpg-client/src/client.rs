//! High-level dashboard client.

use serde_json::Value;
use tracing::debug;
use xpg_types::{AuditRecord, TransactionRecord, UserProfile};

use crate::auth::Credentials;
use crate::error::{ClientError, ClientResult};
use crate::query::{queries, DashboardData, GraphqlRequest, GraphqlResponse};
use crate::session::Session;
use crate::transport::ApiTransport;

/// The raw collections an aggregation run consumes.
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    pub profile: Option<UserProfile>,
    pub transactions: Vec<TransactionRecord>,
    pub audits: Vec<AuditRecord>,
}

/// Typed access to the platform API over an [`ApiTransport`].
pub struct DashboardClient<T> {
    transport: T,
}

impl<T: ApiTransport> DashboardClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Exchange credentials for a bearer-token session.
    pub async fn signin(&self, credentials: &Credentials) -> ClientResult<Session> {
        let body = self.transport.signin(&credentials.basic_header()).await?;
        let session = Session::from_signin_response(&body)?;
        debug!(username = %credentials.username, "signed in");
        Ok(session)
    }

    /// Fetch profile, audits, and transactions in one combined query.
    pub async fn fetch_dashboard(&self, session: &Session) -> ClientResult<RecordSet> {
        let body = self
            .transport
            .graphql(&session.bearer_header(), &GraphqlRequest::dashboard())
            .await?;
        let data = decode::<DashboardData>(body)?;
        Ok(into_record_set(data))
    }

    /// Fetch the same collections with separate per-collection queries.
    ///
    /// Functionally equivalent to [`fetch_dashboard`]; kept because
    /// both request shapes exist in the wild and either may be the
    /// cheaper one depending on API-side caching.
    ///
    /// [`fetch_dashboard`]: Self::fetch_dashboard
    pub async fn fetch_split(&self, session: &Session) -> ClientResult<RecordSet> {
        let authorization = session.bearer_header();

        let user_body = self
            .transport
            .graphql(&authorization, &GraphqlRequest::new(queries::USER_WITH_AUDITS))
            .await?;
        let user_data = decode::<DashboardData>(user_body)?;

        let tx_body = self
            .transport
            .graphql(&authorization, &GraphqlRequest::new(queries::XP_TRANSACTIONS))
            .await?;
        let tx_data = decode::<DashboardData>(tx_body)?;

        let mut records = into_record_set(user_data);
        records.transactions = tx_data.transaction;
        Ok(records)
    }
}

fn decode<D: serde::de::DeserializeOwned + Default>(body: Value) -> ClientResult<D> {
    let response: GraphqlResponse<D> =
        serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    response.into_data()
}

fn into_record_set(data: DashboardData) -> RecordSet {
    let mut records = RecordSet {
        transactions: data.transaction,
        ..Default::default()
    };
    // The user query returns a single-element list for the
    // authenticated user; its audits ride along.
    if let Some(user) = data.user.into_iter().next() {
        records.audits = user.audits;
        records.profile = Some(user.profile);
    }
    debug!(
        transactions = records.transactions.len(),
        audits = records.audits.len(),
        "fetched record set"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::transport::StaticTransport;

    fn dashboard_body() -> Value {
        json!({
            "data": {
                "user": [{
                    "id": 9,
                    "login": "jdoe",
                    "auditRatio": 1.1,
                    "totalUp": 10,
                    "totalDown": 5,
                    "audits": [
                        {
                            "id": 1,
                            "auditedAt": "2024-02-01T09:00:00Z",
                            "auditorId": 9,
                            "closureType": "succeeded"
                        },
                        {
                            "id": 2,
                            "auditedAt": "2024-02-02T09:00:00Z",
                            "auditorId": 9,
                            "closureType": "expired"
                        }
                    ]
                }],
                "transaction": [
                    {
                        "amount": 1500,
                        "type": "xp",
                        "createdAt": "2024-02-01T10:00:00Z",
                        "path": "/bahrain/bh-module/graphql"
                    }
                ]
            }
        })
    }

    #[tokio::test]
    async fn signin_then_fetch_dashboard() {
        let transport = StaticTransport::new("jwt.abc");
        transport.push_response(dashboard_body());
        let client = DashboardClient::new(transport);

        let session = client
            .signin(&Credentials::new("jdoe", "hunter2"))
            .await
            .unwrap();
        let records = client.fetch_dashboard(&session).await.unwrap();

        assert_eq!(records.profile.as_ref().unwrap().login, "jdoe");
        assert_eq!(records.transactions.len(), 1);
        assert_eq!(records.audits.len(), 2);
    }

    #[tokio::test]
    async fn split_fetch_matches_combined() {
        let combined_transport = StaticTransport::new("jwt.abc");
        combined_transport.push_response(dashboard_body());
        let combined_client = DashboardClient::new(combined_transport);

        let split_transport = StaticTransport::new("jwt.abc");
        let mut user_only = dashboard_body();
        user_only["data"]["transaction"] = json!([]);
        let mut tx_only = json!({"data": {}});
        tx_only["data"]["transaction"] = dashboard_body()["data"]["transaction"].clone();
        split_transport.push_response(user_only);
        split_transport.push_response(tx_only);
        let split_client = DashboardClient::new(split_transport);

        let session = Session::new("jwt.abc");
        let combined = combined_client.fetch_dashboard(&session).await.unwrap();
        let split = split_client.fetch_split(&session).await.unwrap();

        assert_eq!(combined.transactions, split.transactions);
        assert_eq!(combined.audits, split.audits);
        assert_eq!(
            combined.profile.as_ref().map(|p| &p.login),
            split.profile.as_ref().map(|p| &p.login)
        );
    }

    #[tokio::test]
    async fn graphql_errors_surface_first_message() {
        let transport = StaticTransport::new("jwt.abc");
        transport.push_response(json!({
            "errors": [{ "message": "Could not verify JWT" }]
        }));
        let client = DashboardClient::new(transport);

        let result = client.fetch_dashboard(&Session::new("expired")).await;
        match result {
            Err(ClientError::Graphql(message)) => assert_eq!(message, "Could not verify JWT"),
            other => panic!("expected graphql error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetched_records_feed_the_aggregator() {
        use xpg_aggregate::Aggregator;

        let transport = StaticTransport::new("jwt.abc");
        transport.push_response(dashboard_body());
        let client = DashboardClient::new(transport);

        let records = client
            .fetch_dashboard(&Session::new("jwt.abc"))
            .await
            .unwrap();
        let output = Aggregator::default().aggregate(&records.transactions, &records.audits);

        assert_eq!(output.total_xp, 1500);
        assert_eq!(output.distribution.succeeded, 50.0);
        assert_eq!(output.distribution.expired, 50.0);
        assert!(output.diagnostics.is_clean());
    }
}
