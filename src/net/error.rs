//! Error taxonomy for REST calls.

use crate::state::storage::StorageError;

/// Failure surfaced to API callers.
///
/// Session expiry (HTTP 401) is not represented here: it is recovered by
/// clearing the session and resolving the call with no body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or the network round trip failed.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-success status with an empty body.
    #[error("HTTP Error: {status} {status_text}")]
    Http { status: u16, status_text: String },
    /// Non-success status with a JSON body; carries `detail` when present.
    #[error("{0}")]
    Api(String),
    /// Body was not valid JSON.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
    /// Body was valid JSON but not the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),
    /// The session could not be persisted.
    #[error("could not save session: {0}")]
    Session(#[from] StorageError),
    /// No HTTP transport in this environment.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status attached to the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
