//! Error types used throughout the client

use std::time::Duration;

use thiserror::Error;

/// Failures raised by the transport that carries portal calls.
///
/// These are opaque to the request workflows: they are passed through to the
/// caller unchanged unless a workflow can attach more specific meaning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("{url} returned status {status}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Main error type for CZDS operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CzdsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("{0} was empty")]
    EmptyReport(String),

    /// Writing to a caller-supplied sink failed.
    #[error("Failed to write report: {0}")]
    Sink(String),

    #[error(transparent)]
    Transport(#[from] TransportFailure),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CzdsError {
    /// Body text of a remote client-error response, if this error is one.
    ///
    /// Authentication (401/403), unknown resource (404) and throttling (429)
    /// responses are not treated as the portal declining the call.
    pub fn client_rejection(&self) -> Option<&str> {
        match self {
            Self::Transport(TransportFailure::Status { status, body, .. })
                if (400..500).contains(status) && !matches!(status, 401 | 403 | 404 | 429) =>
            {
                Some(body.as_str())
            }
            _ => None,
        }
    }

    /// Reinterpret a declined submission as [`CzdsError::Rejected`].
    pub fn into_rejected(self) -> Self {
        match self.client_rejection() {
            Some(detail) => Self::Rejected(detail_or_status(&self, detail)),
            None => self,
        }
    }

    /// Reinterpret a declined listing query as [`CzdsError::InvalidQuery`].
    pub fn into_invalid_query(self) -> Self {
        match self.client_rejection() {
            Some(detail) => Self::InvalidQuery(detail_or_status(&self, detail)),
            None => self,
        }
    }
}

fn detail_or_status(err: &CzdsError, detail: &str) -> String {
    if detail.trim().is_empty() {
        err.to_string()
    } else {
        detail.to_string()
    }
}

impl From<serde_json::Error> for CzdsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(TransportFailure::Decode(err.to_string()))
    }
}

/// Result type alias for CZDS operations
pub type Result<T> = std::result::Result<T, CzdsError>;
