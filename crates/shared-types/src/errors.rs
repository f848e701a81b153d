//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Failure of a remote capability call: network error, timeout or 5xx.
///
/// Always retryable. Never means "the answer was no"; a confirmed negative
/// answer (not found, out of zone) is a value, not a `TransportError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request did not complete within the transport timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection could not be established or was dropped.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Server answered with an error status.
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },

    /// Response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Caller is not authenticated for this capability.
    #[error("Unauthorized")]
    Unauthorized,
}

impl TransportError {
    /// Short, stable label for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Connection(_) => "connection",
            Self::ServerError { .. } => "server_error",
            Self::Decode(_) => "decode",
            Self::Unauthorized => "unauthorized",
        }
    }
}
