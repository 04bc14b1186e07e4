//! Reply types exchanged with the application shell.
//!
//! A fetch either succeeds with the decrypted plaintext (a plain string, no
//! envelope) or fails with exactly one categorized error. The error side is
//! serialised as JSON so any shell — command line today, an embedding
//! application tomorrow — can pattern-match on the `code` field.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// JSON error envelope reported to the shell on a failed fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    /// Machine-readable code, e.g. `"NETWORK_ERROR"` or `"HTTP_ERROR"`.
    pub code: String,
    /// Human-readable description safe to surface to the shell.
    pub message: String,
    /// Underlying cause, when one exists. Never the raw ciphertext.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorReply {
    /// Construct an [`ErrorReply`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            detail: None,
        }
    }
}

impl From<&FetchError> for ErrorReply {
    fn from(err: &FetchError) -> Self {
        let (message, detail) = match err {
            FetchError::InvalidArgument => ("endpoint must not be empty".to_owned(), None),
            FetchError::Network(cause) => (
                "failed to reach the remote service".to_owned(),
                Some(cause.clone()),
            ),
            FetchError::Http(status) => (format!("request failed with HTTP status {status}"), None),
            FetchError::Decoding(cause) => (
                "failed to decode the response body".to_owned(),
                Some(cause.clone()),
            ),
        };
        Self {
            code: err.code().to_owned(),
            message,
            detail,
        }
    }
}
