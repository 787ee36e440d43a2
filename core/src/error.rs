//! Errors returned by `SearchClient`.
//!
//! # Design
//! Every variant is a distinct class a caller may want to react to on its
//! own: `Validation` means the request itself was wrong and retrying it as-is
//! is pointless, `Timeout` is the only class worth retrying blindly, and
//! server-reported failures keep whatever text the server sent.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Rejected locally before sending, or a validation message the server
    /// returned with a 400.
    #[error("{0}")]
    Validation(String),

    /// The server returned 401.
    #[error("bad AccessToken")]
    BadAccessToken,

    /// The server returned 500; carries the response body.
    #[error("{0}")]
    ServerFatal(String),

    /// A 400 whose message is not one the client knows.
    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    #[error("unknown error: status {0}")]
    UnknownStatus(u16),

    #[error("timeout after {timeout:?} for {url}")]
    Timeout { timeout: Duration, url: String },

    #[error("unknown error {0}")]
    Transport(#[source] ureq::Error),

    #[error("cannot unpack error json: {0}")]
    UnpackErrorJson(#[source] serde_json::Error),

    #[error("cannot unpack result json: {0}")]
    UnpackResultJson(#[source] serde_json::Error),
}

impl SearchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Timeout { .. })
    }
}
