//! Error types for the Firefox Relay client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP exchange itself failed (connection, TLS, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a status code of 400 or above.
    ///
    /// `body` is the raw response text. It is kept byte-for-byte when the
    /// service sends UTF-8; invalid UTF-8 sequences become U+FFFD.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized. No request was sent.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// No API token, or only whitespace, was given to the builder.
    #[error("missing API token")]
    MissingToken,

    /// The API token cannot be sent as an HTTP header value.
    #[error("invalid API token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// Status code of a classified API failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a classified API failure.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}
