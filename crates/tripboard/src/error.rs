//! Host error types.

use thiserror::Error;
use tripboard_core::trip::TripError;
use uuid::Uuid;

/// Result type alias for the host.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading events or running a session.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate event ID in input: {0}")]
    DuplicateEvent(Uuid),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("No event at position {0}")]
    NoSuchPosition(usize),

    #[error("Date out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    Trip(#[from] TripError),
}
