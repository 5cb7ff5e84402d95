use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("got \"{status}\" while requesting token, check that your secret is valid")]
    Credentials { status: StatusCode },

    #[error("token request failed: {0}")]
    Token(String),

    #[error("got \"{status}\" while requesting {target}")]
    Status { status: StatusCode, target: String },

    #[error("api error {error_type}: {message} (trace id {trace_id})")]
    Api {
        error_type: String,
        message: String,
        trace_id: String,
    },

    #[error("error decoding response from {target}: {source}")]
    Decode {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
