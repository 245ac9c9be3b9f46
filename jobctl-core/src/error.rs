//! Error types for the admin protocol
//!
//! The client distinguishes two error classes at the transport boundary:
//! outbound failures (connect, send) are fatal and unwind to process
//! termination in `main`, while inbound failures (read error, EOF, garbled
//! response) end or skip a single receive cycle. Both classes are carried
//! by the same `Error` enum; the caller decides the severity.

use thiserror::Error;

/// Result type used throughout the jobctl crates
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the protocol layer and the transport
#[derive(Debug, Error)]
pub enum Error {
    /// A request could not be serialized to JSON
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Received bytes were not a well-formed UTF-8 JSON object
    #[error("decode error: {0}")]
    Decode(String),

    /// Low-level socket or stdin failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection to the master is no longer usable
    #[error("connection closed")]
    ConnectionClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err: Error = io.into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::BrokenPipe),
            _ => panic!("expected Io error"),
        }
    }

    #[test]
    fn test_decode_error_display() {
        let err = Error::Decode("expected value at line 1".to_string());
        assert!(err.to_string().contains("decode error"));
        assert!(err.to_string().contains("expected value"));
    }
}
