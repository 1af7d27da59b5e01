//! Error types for the Dotscience admin client

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the admin client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a complete response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The hub answered with a status outside 2xx
    #[error("unexpected status {} for {method} {url}", .status.as_u16())]
    UnexpectedStatus {
        /// HTTP status code
        status: StatusCode,
        /// Request method
        method: Method,
        /// Full request URL
        url: String,
        /// Response body, often carrying the hub's own diagnostic
        body: Vec<u8>,
    },

    /// The response body did not match the expected JSON shape
    #[error("failed decoding {operation} response: {source}; body: {}", String::from_utf8_lossy(.body))]
    Decode {
        /// Operation whose response was being decoded
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
        /// Raw response body
        body: Vec<u8>,
    },

    /// A request body could not be serialized
    #[error("failed encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Client configuration rejected before any request was made
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Runner lacks an identifier needed to build its endpoint path
    #[error("invalid runner: {0}")]
    InvalidRunner(String),
}

impl ClientError {
    /// HTTP status of an unexpected-status error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Response body attached to the error, if the hub sent one
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::UnexpectedStatus { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Response body as text, replacing invalid UTF-8
    pub fn body_text(&self) -> Option<String> {
        self.body()
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }
}
