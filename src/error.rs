//! Error types for the kvcli client.

use thiserror::Error;

/// Errors surfaced while executing a command against the server.
///
/// The rendering layer never produces these; it receives them from the
/// surrounding client and wraps their message for display.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Error reply reported by the server; the message renders verbatim.
    #[error("{0}")]
    Server(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("connection error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::ConfigError(err.to_string())
    }
}
