//! Error types for the events API client

use thiserror::Error;

/// Errors that can occur when interacting with the events API
///
/// The client never recovers from any of these; every failure reaches the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure before a response was obtained
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Server responded with a non-success status
    ///
    /// The response body is not read; only the status is kept.
    #[error("server responded with status {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Response body was not valid JSON or did not match the event shape
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status carried by this error, if the server responded at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
