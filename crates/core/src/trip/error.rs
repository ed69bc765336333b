use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when routing requests to trip events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripError {
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),
}

/// Result type for trip operations.
pub type Result<T> = std::result::Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_error_display() {
        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000007").unwrap();
        assert_eq!(
            TripError::EventNotFound(id).to_string(),
            "Event not found: 00000000-0000-0000-0000-000000000007"
        );
    }
}
