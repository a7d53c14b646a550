//! Station feed error types.

/// Errors from the station snapshot feed.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the feed response
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read a captured snapshot file
    #[error("failed to read snapshot file {path}: {message}")]
    File { path: String, message: String },
}
