//! Output formatting functions.

use serde::Serialize;
use tripboard_core::trip::{EventSortType, TripEvent};
use uuid::Uuid;

use crate::cli::OutputFormat;

/// Machine-readable snapshot of what the board shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot<'a> {
    pub sort: EventSortType,
    pub editing: Option<Uuid>,
    pub events: Vec<&'a TripEvent>,
}

/// Format a value as JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a value for output.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}
