// Error types for API operations

use thiserror::Error;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the API client.
///
/// Failures are logged once at the point of occurrence and then propagated
/// unchanged; there is no retry and callers decide what the user sees.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: network unreachable, timeout, TLS, or a
    /// body that could not be read or decoded by reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the backend, body carried verbatim
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// A JSON payload that arrived but does not match the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure inside the server-sent-event stream
    #[error("event stream error: {0}")]
    Stream(String),
}
