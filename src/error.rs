//! Error types for xswire
//!
//! Provides a unified error type for packet construction and parsing.

use thiserror::Error;

/// Result type alias using XsError
pub type Result<T> = std::result::Result<T, XsError>;

/// Unified error type for xswire operations
#[derive(Debug, Error)]
pub enum XsError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Packet Errors
    // -------------------------------------------------------------------------
    #[error("Invalid operation: {0}")]
    InvalidOperation(u32),

    #[error("Invalid payload: {size} bytes (max {max})")]
    InvalidPayload { size: usize, max: usize },

    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Unknown operation name: {0}")]
    UnknownOperationName(String),
}

impl XsError {
    /// Whether the error describes an invalid packet rather than a failed transport.
    ///
    /// A transport may resync or drop the connection on a protocol violation;
    /// an `Io` error leaves that decision to its own reconnect policy.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            XsError::InvalidOperation(_)
                | XsError::InvalidPayload { .. }
                | XsError::MalformedHeader(_)
        )
    }
}
