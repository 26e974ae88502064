//! The single error kind surfaced by the data access layer.
//!
//! # Design
//! Variants exist for debugging and logging only. The list view renders every
//! variant the same way, through `Display`.

use thiserror::Error;

/// Any failed round-trip against the todo API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl RequestError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
