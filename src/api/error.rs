use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the report backend.
///
/// The live search pipeline never propagates these to rendering; they are
/// logged and degraded to an empty result set. One-shot callers get the
/// full error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request never produced a response (DNS, refused, timeout).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
