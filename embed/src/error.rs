//! Error types for the embedding client.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbedError>;

#[derive(Error, Debug)]
pub enum EmbedError {
    /// Required configuration is missing or invalid.
    #[error("embed: configuration error: {0}")]
    Configuration(String),

    /// The input sequence was empty.
    #[error("embed: empty input")]
    EmptyInput,

    /// The HTTP exchange could not complete.
    #[error("embed: transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("embed: API error {status}: {body}")]
    RemoteService { status: u16, body: String },

    /// The service answered with success but the body was not usable.
    #[error("embed: malformed response: {0}")]
    MalformedResponse(String),
}

impl EmbedError {
    /// Returns the HTTP status for remote service errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            EmbedError::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the service rejected the credential.
    pub fn is_auth(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns true if the service reported rate limiting.
    pub fn is_rate_limit(&self) -> bool {
        self.status() == Some(429)
    }

    /// Returns true if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }
}
