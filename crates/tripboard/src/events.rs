//! Loading trip events from disk.

use std::collections::HashSet;
use std::path::Path;

use tripboard_core::trip::TripEvent;

use crate::error::{CliError, Result};

/// Parses a JSON array of events, rejecting duplicate IDs.
pub fn parse_events(json: &str) -> Result<Vec<TripEvent>> {
    let events: Vec<TripEvent> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(events.len());
    if let Some(duplicate) = events.iter().find(|event| !seen.insert(event.id)) {
        return Err(CliError::DuplicateEvent(duplicate.id));
    }

    Ok(events)
}

/// Reads and parses an events file.
pub fn load_events(path: &Path) -> Result<Vec<TripEvent>> {
    let json = std::fs::read_to_string(path)?;
    let events = parse_events(&json)?;
    tracing::info!(path = %path.display(), count = events.len(), "Loaded events");
    Ok(events)
}
