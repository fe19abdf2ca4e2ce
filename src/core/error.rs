//! Core error types.

use std::fmt;

/// Errors surfaced by response body streams.
///
/// A body stream yields `Result<Bytes, Error>` items; an `Err` means the
/// body could not be fully transmitted (e.g. the upstream producer died
/// or the connection was reset mid-transfer).
#[derive(Debug)]
pub enum Error {
    /// Peer closed the connection while the body was in flight.
    ConnectionReset,

    /// I/O error.
    Io(std::io::Error),

    /// Custom error with message.
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConnectionReset => write!(f, "connection reset by peer"),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Custom(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Custom(msg.to_string())
    }
}

/// Result type alias for body operations.
pub type Result<T> = std::result::Result<T, Error>;
