//! Bearer-token sessions.
//!
//! The token is an explicit value handed from signin to every query
//! call. Nothing in xpgraph stores it in ambient state; the embedding
//! application decides its lifetime.

use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// An authenticated session against the platform API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Extract a session from the signin response body.
    ///
    /// The platform has shipped two shapes: a bare JSON string holding
    /// the JWT, and an object with a `token` field. Both are accepted.
    pub fn from_signin_response(body: &Value) -> ClientResult<Self> {
        let token = match body {
            Value::String(token) => Some(token.as_str()),
            Value::Object(map) => map.get("token").and_then(Value::as_str),
            _ => None,
        };
        match token {
            Some(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(ClientError::MissingToken),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The `Authorization` header value for authenticated requests.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_bare_string_body() {
        let session = Session::from_signin_response(&json!("jwt.abc.def")).unwrap();
        assert_eq!(session.token(), "jwt.abc.def");
    }

    #[test]
    fn accepts_token_object_body() {
        let session = Session::from_signin_response(&json!({"token": "jwt.abc.def"})).unwrap();
        assert_eq!(session.bearer_header(), "Bearer jwt.abc.def");
    }

    #[test]
    fn rejects_missing_or_empty_token() {
        for body in [json!({}), json!({"token": ""}), json!(42), json!(null)] {
            assert!(matches!(
                Session::from_signin_response(&body),
                Err(ClientError::MissingToken)
            ));
        }
    }
}
