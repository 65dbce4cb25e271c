//! Error types for the column browser.
//!
//! Two layers, both recoverable:
//!
//! - [`FetchError`] - transport-level failures produced by a `Source`
//! - [`NavigateError`] - navigation failures surfaced at the orchestrator
//!   boundary; the stack and active path stay at their last-good state

use thiserror::Error;

/// Transport-level failure reported by a fetch source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (connection, CORS, missing window, ...).
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status).
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Request timed out.
    #[error("request timed out")]
    Timeout,
    /// Response could not be decoded or is missing required fields.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Navigation failure surfaced to the UI-event layer.
///
/// Every navigation is independently retryable by re-issuing the same event.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavigateError {
    /// The fetch for `path` failed; nothing was committed.
    #[error("fetch failed for {path}")]
    FetchFailed { path: String, source: FetchError },
    /// The response for `path` violated the listing contract.
    #[error("malformed listing for {path}")]
    MalformedListing { path: String, source: FetchError },
}

impl NavigateError {
    /// Wrap a transport error for `path`, sorting decode failures into
    /// [`NavigateError::MalformedListing`].
    pub(crate) fn fetch(path: &str, source: FetchError) -> Self {
        match source {
            FetchError::Malformed(_) => Self::MalformedListing {
                path: path.to_owned(),
                source,
            },
            _ => Self::FetchFailed {
                path: path.to_owned(),
                source,
            },
        }
    }

    /// Path of the navigation that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::FetchFailed { path, .. } | Self::MalformedListing { path, .. } => path,
        }
    }
}
