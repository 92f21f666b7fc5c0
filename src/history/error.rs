//! History persistence error types.

use thiserror::Error;

/// Errors that can occur while persisting or loading history.
///
/// These never surface as calculator errors; the session swallows them.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing the history file failed
    #[error("history I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the history file failed
    #[error("history serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
