//! Error types for syncwire-client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload carried by errors raised inside the remote process.
///
/// The remote side reports its own traceback and the exception name; both are
/// forwarded verbatim when the error is reported back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteErrorData {
    /// Remote traceback.
    pub trace: String,
    /// Remote exception name and message.
    pub exception: String,
}

/// Main error type for all syncwire operations.
#[derive(Debug, Error)]
pub enum SyncwireError {
    /// I/O error raised by a transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level failure (handshake refused, socket dropped, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Error raised by the remote process.
    #[error("Remote error: {}", .0.exception)]
    Remote(RemoteErrorData),

    /// No session is available for the operation.
    #[error("Not connected")]
    NotConnected,

    /// An attachment was requested before any session installed its hook.
    #[error("No attachment hook installed")]
    AttachmentsUnavailable,

    /// An argument failed to resolve.
    #[error("Decoration error: {0}")]
    Decorate(String),

    /// Shared state failed to load or sync.
    #[error("State error: {0}")]
    State(String),

    /// A connect listener failed.
    #[error("Listener error: {0}")]
    Listener(String),

    /// Invalid controller or connection configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncwireError {
    /// Structured remote payload, if this error originated in the remote process.
    pub fn remote_data(&self) -> Option<&RemoteErrorData> {
        match self {
            SyncwireError::Remote(data) => Some(data),
            _ => None,
        }
    }
}

/// Result type alias using SyncwireError.
pub type Result<T> = std::result::Result<T, SyncwireError>;
