//! Client error types.

use crate::protocol::ParseError;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Failure to obtain a usable response from the game server.
///
/// Covers non-success HTTP statuses, connection failures and bodies that
/// cannot be read or decoded as JSON.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// HTTP status, when the server answered at all.
    pub status: Option<u16>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a transport error for a non-success HTTP status.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: format!("HTTP request failed: {}", err),
            status: err.status().map(|status| status.as_u16()),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid JSON response: {}", err))
    }
}

/// Error surfaced by session operations that reach the server.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ClientError {
    /// The round-trip itself failed.
    #[display("{}", _0)]
    Transport(TransportError),
    /// The server answered with a payload the client cannot accept.
    #[display("Invalid server response: {}", _0)]
    Parse(ParseError),
}
