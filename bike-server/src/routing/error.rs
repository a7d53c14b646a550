//! Route estimator error types.

/// Errors from the route estimator client.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Estimator returned an error status
    #[error("estimator error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the estimator response
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response parsed but the geometry or duration is unusable
    #[error("malformed route: {reason}")]
    Malformed { reason: &'static str },
}
