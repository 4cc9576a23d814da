use thiserror::Error;

/// Errors that can occur while fetching a quote.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server responded, but not with a success status
    #[error("server returned status {status}")]
    Status { status: u16 },
}
