use thiserror::Error;

/// Returned when a string does not name any calculator token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calculator token {0:?}")]
pub struct ParseTokenError(pub String);

/// Failures reported by a [`Clipboard`](crate::traits::Clipboard) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The backend could not be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The backend was reachable but rejected the write.
    #[error("failed to copy to clipboard: {0}")]
    Write(String),
}
