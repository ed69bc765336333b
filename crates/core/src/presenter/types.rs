use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trip::TripEvent;

/// Opaque handle to a component owned by a [`Board`](super::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Opaque handle to a registered document-level key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyListenerId(u64);

impl KeyListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Where a component is inserted relative to its container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPosition {
    AfterBegin,
    BeforeEnd,
}

/// Which of its two views an event presenter is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventMode {
    /// The read-only event card.
    #[default]
    Preview,
    /// The edit form.
    Edit,
}

/// Visual state requested by the caller while a change is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    Saving,
    Deleting,
    /// The change failed: shake the active view and re-enable the form.
    Aborting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKey {
    Escape,
    Enter,
    Other,
}

/// Transient flags of the edit form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub is_disabled: bool,
    pub is_saving: bool,
    pub is_deleting: bool,
}

impl FormState {
    /// Merges the fields set in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: FormStatePatch) {
        if let Some(is_disabled) = patch.is_disabled {
            self.is_disabled = is_disabled;
        }
        if let Some(is_saving) = patch.is_saving {
            self.is_saving = is_saving;
        }
        if let Some(is_deleting) = patch.is_deleting {
            self.is_deleting = is_deleting;
        }
    }
}

/// Partial update of [`FormState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormStatePatch {
    pub is_disabled: Option<bool>,
    pub is_saving: Option<bool>,
    pub is_deleting: Option<bool>,
}

impl FormStatePatch {
    pub fn saving() -> Self {
        Self {
            is_disabled: Some(true),
            is_saving: Some(true),
            is_deleting: None,
        }
    }

    pub fn deleting() -> Self {
        Self {
            is_disabled: Some(true),
            is_saving: None,
            is_deleting: Some(true),
        }
    }

    /// Clears every flag.
    pub fn idle() -> Self {
        Self {
            is_disabled: Some(false),
            is_saving: Some(false),
            is_deleting: Some(false),
        }
    }
}

/// Header of a day bucket. Absent when events are rendered ungrouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHeader {
    pub number: usize,
    pub date: NaiveDate,
}

/// Components created for one day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDayComponents {
    /// The bucket itself, rendered into the days list.
    pub day: ComponentId,
    /// The container event cards are rendered into.
    pub events_list: ComponentId,
}

/// User input routed to an event presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIntent {
    Edit,
    Close,
    Submit(TripEvent),
    Delete,
    ToggleFavorite,
    Key(KeyboardKey),
}
