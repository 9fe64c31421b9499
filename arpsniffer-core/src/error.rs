//! Error types shared across the arpsniffer crates

use thiserror::Error;

/// Result type alias for arpsniffer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for arpsniffer
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed field value or violated input contract
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Truncated or invalid wire data
    #[error("Packet parsing error: {0}")]
    PacketParsing(String),
}

impl Error {
    /// Create a protocol error with a custom message
    pub fn protocol<S: Into<String>>(msg: S) -> Self {
        Error::Protocol(msg.into())
    }

    /// Create a packet parsing error with a custom message
    pub fn parsing<S: Into<String>>(msg: S) -> Self {
        Error::PacketParsing(msg.into())
    }
}
