//! Common error types shared across crates.

use thiserror::Error;

/// Top-level error for a single fetch invocation.
///
/// Every variant is terminal for the call: nothing is retried internally and
/// no partial result is ever delivered alongside an error. The caller decides
/// whether to invoke again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The caller supplied no endpoint (empty or blank string). Detected
    /// before any network activity.
    #[error("endpoint must not be empty")]
    InvalidArgument,

    /// The request never completed: DNS, connection, or timeout failure.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered, but with a non-success status code, or the
    /// response carried no readable body.
    #[error("request failed with HTTP status {0}")]
    Http(u16),

    /// The response body could not be decoded: bad Base64, misaligned
    /// ciphertext, or a cipher failure. The ciphertext itself is never
    /// included in the message.
    #[error("failed to decode response: {0}")]
    Decoding(String),
}

impl FetchError {
    /// Wire code string reported to the application shell.
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::InvalidArgument => "INVALID_ARGUMENT",
            FetchError::Network(_) => "NETWORK_ERROR",
            FetchError::Http(_) => "HTTP_ERROR",
            FetchError::Decoding(_) => "DECODING_ERROR",
        }
    }
}
