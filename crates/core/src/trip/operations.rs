use uuid::Uuid;

use super::types::TripEvent;

/// Replaces the event whose ID matches `event.id`, keeping every other
/// position untouched. Returns false when no event matched.
pub fn replace_event(events: &mut [TripEvent], event: &TripEvent) -> bool {
    match events.iter_mut().find(|it| it.id == event.id) {
        Some(slot) => {
            *slot = event.clone();
            true
        }
        None => false,
    }
}

/// Removes the event with the given ID. Returns false when no event matched.
pub fn remove_event(events: &mut Vec<TripEvent>, id: Uuid) -> bool {
    let before = events.len();
    events.retain(|it| it.id != id);
    events.len() != before
}

/// Finds an event by ID.
pub fn find_event(events: &[TripEvent], id: Uuid) -> Option<&TripEvent> {
    events.iter().find(|it| it.id == id)
}

/// Distinct destination names in first-seen order, for form autocompletion.
pub fn unique_destinations(events: &[TripEvent]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for event in events {
        if !names.iter().any(|name| name == &event.destination.name) {
            names.push(event.destination.name.clone());
        }
    }

    names
}
