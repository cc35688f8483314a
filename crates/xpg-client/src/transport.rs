//! Transport seam between the client and the network.
//!
//! The aggregation pipeline has no retry, timeout, or cancellation
//! semantics of its own; all of that belongs to whichever
//! [`ApiTransport`] implementation the embedding application supplies.
//! [`StaticTransport`] serves tests and offline runs from canned bodies.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{ClientError, ClientResult};
use crate::query::GraphqlRequest;

/// Interface to the platform's HTTP API.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// POST to the signin endpoint with a Basic `Authorization` value;
    /// returns the raw response body.
    async fn signin(&self, authorization: &str) -> ClientResult<Value>;

    /// POST a query to the GraphQL endpoint with a Bearer
    /// `Authorization` value; returns the raw response body.
    async fn graphql(&self, authorization: &str, request: &GraphqlRequest) -> ClientResult<Value>;
}

/// In-memory transport serving canned responses.
///
/// Signin always succeeds with the configured token; GraphQL responses
/// are served in the order they were queued. Authorization values are
/// recorded for assertions.
pub struct StaticTransport {
    token: String,
    responses: Mutex<Vec<Value>>,
    seen_authorizations: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            responses: Mutex::new(Vec::new()),
            seen_authorizations: Mutex::new(Vec::new()),
        }
    }

    /// Queue the next GraphQL response body.
    pub fn push_response(&self, body: Value) {
        self.responses
            .lock()
            .expect("response queue poisoned")
            .push(body);
    }

    /// Every `Authorization` value seen, in call order.
    pub fn authorizations(&self) -> Vec<String> {
        self.seen_authorizations
            .lock()
            .expect("authorization log poisoned")
            .clone()
    }
}

#[async_trait]
impl ApiTransport for StaticTransport {
    async fn signin(&self, authorization: &str) -> ClientResult<Value> {
        self.seen_authorizations
            .lock()
            .expect("authorization log poisoned")
            .push(authorization.to_string());
        Ok(json!({ "token": self.token }))
    }

    async fn graphql(&self, authorization: &str, _request: &GraphqlRequest) -> ClientResult<Value> {
        self.seen_authorizations
            .lock()
            .expect("authorization log poisoned")
            .push(authorization.to_string());
        let mut responses = self.responses.lock().expect("response queue poisoned");
        if responses.is_empty() {
            return Err(ClientError::Transport("no queued response".into()));
        }
        Ok(responses.remove(0))
    }
}
