use crate::trip::{EventSortType, TripEvent, UpdateKind, UserAction};

use super::types::{
    ComponentId, DayHeader, FormStatePatch, KeyListenerId, RenderPosition, TripDayComponents,
};

/// Invoked by the board once a shake animation has finished.
pub type ShakeCallback = Box<dyn FnOnce(&mut dyn Board)>;

/// Rendering collaborator driven by the presenters.
///
/// Implementations own every component; presenters only hold handles.
pub trait Board {
    /// Creates the read-only card for an event.
    fn create_event_card(&mut self, event: &TripEvent) -> ComponentId;

    /// Creates the edit form for an event.
    fn create_event_form(&mut self, event: &TripEvent, destinations: &[String]) -> ComponentId;

    /// Creates the "no events" placeholder.
    fn create_no_events(&mut self) -> ComponentId;

    /// Creates the sort control.
    fn create_sort(&mut self, sorts: &[EventSortType], active: EventSortType) -> ComponentId;

    /// Creates the container day buckets are rendered into.
    fn create_trip_days(&mut self) -> ComponentId;

    /// Creates a day bucket.
    fn create_trip_day(&mut self, header: Option<DayHeader>) -> TripDayComponents;

    fn render(&mut self, container: ComponentId, component: ComponentId, position: RenderPosition);

    /// Puts `new` where `old` is displayed. `old` stays alive until removed.
    fn replace(&mut self, old: ComponentId, new: ComponentId);

    /// Detaches and drops a component.
    fn remove(&mut self, component: ComponentId);

    /// Drops every child of `container`.
    fn clear(&mut self, container: ComponentId);

    /// Marks the active sort mode on the sort control.
    fn update_sort(&mut self, sort: ComponentId, active: EventSortType);

    /// Merges transient flags into the form's state.
    fn update_form(&mut self, form: ComponentId, patch: FormStatePatch);

    /// Restores the form's fields to `event`, discarding pending edits.
    fn reset_form(&mut self, form: ComponentId, event: &TripEvent);

    /// Plays the failure animation, then calls `on_complete` exactly once.
    fn shake(&mut self, component: ComponentId, on_complete: ShakeCallback);

    fn add_key_listener(&mut self) -> KeyListenerId;

    fn remove_key_listener(&mut self, id: KeyListenerId);
}

/// Write path for user actions. Persists the change and reports the outcome
/// back through the store and [`EventState`](super::EventState).
pub trait Dispatcher {
    fn change_event(&mut self, action: UserAction, kind: UpdateKind, event: TripEvent);
}
