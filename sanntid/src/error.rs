//! Error types shared by the upstream clients.

/// Errors that end a lookup.
///
/// Decode failures are not errors: a body that cannot be decoded
/// yields an empty result (see [`crate::decode::Decoded`]).
#[derive(Debug, thiserror::Error)]
pub enum SanntidError {
    /// HTTP request failed (connection, DNS, or body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No stop matched the search text
    #[error("Unable to find stop with search text: {search}")]
    StopNotFound { search: String },

    /// The HTTP client could not be configured
    #[error("client configuration error: {0}")]
    Client(String),
}
