//! Error types for labtrack

use thiserror::Error;

/// Result type alias using labtrack's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Labtrack error types
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-2xx status.
    #[error("request failed with HTTP status {status}")]
    Request { status: u16 },

    /// The request never produced a usable response: network unreachable,
    /// connection reset, or a body that failed to parse as JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client-side input validation; never reaches the backend.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the failure carries an HTTP status from the backend.
    pub fn is_request(&self) -> bool {
        matches!(self, Error::Request { .. })
    }

    /// The HTTP status for a request failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status } => Some(*status),
            _ => None,
        }
    }
}
