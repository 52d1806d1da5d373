//! Error taxonomy shared by every backend call.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, TLS, timeout, broken body stream.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Server { status: StatusCode, body: String },

    /// The backend answered 2xx but the payload did not match the wire contract.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid id: {0}")]
    InvalidId(String),

    /// Rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
