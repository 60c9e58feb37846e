//! Error types for the collaborator boundaries.
//!
//! Nothing here is fatal to the event loop: every variant ends up as a
//! red line in the terminal view followed by a fresh prompt.

use thiserror::Error;

/// Failures of the persistent websocket channel.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint `{0}`")]
    InvalidEndpoint(String),

    #[error("websocket connect failed: {0}")]
    Connect(String),

    #[error("websocket i/o failed: {0}")]
    Io(String),

    #[error("transport is closed")]
    Closed,
}

/// Failures of the one-off HTTP fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("malformed joke reply: {0}")]
    Malformed(String),
}

/// Problems with an asynchronous reply payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// The upstream service reported an error instead of data.
    #[error("{topic} service error: {message}")]
    Upstream {
        topic: &'static str,
        message: String,
    },

    /// The payload is not shaped the way the formatter expects.
    #[error("malformed {topic} reply: {reason}")]
    Malformed {
        topic: &'static str,
        reason: String,
    },
}

impl ReplyError {
    pub fn malformed(topic: &'static str, reason: impl ToString) -> Self {
        ReplyError::Malformed {
            topic,
            reason: reason.to_string(),
        }
    }
}
