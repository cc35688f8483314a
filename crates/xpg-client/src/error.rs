use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("signin rejected: {0}")]
    SigninRejected(String),

    #[error("signin response carried no token")]
    MissingToken,

    #[error("graphql error: {0}")]
    Graphql(String),

    #[error("response decode error: {0}")]
    Decode(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
