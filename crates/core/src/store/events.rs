//! Observable in-memory collection of trip events.

use uuid::Uuid;

use crate::trip::{find_event, remove_event, replace_event, TripEvent, UpdateKind};

use super::observer::{Observer, SubscriptionId};

/// Ordered collection of trip events with change notification.
///
/// IDs are unique within the collection. Updates and deletes locate events
/// by ID, never by position. Every mutation notifies subscribers
/// synchronously before returning; subscribers must not mutate the store
/// from inside the callback.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<TripEvent>,
    observer: Observer<TripEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection with a copy of `events`. Does not notify.
    pub fn set_events(&mut self, events: &[TripEvent]) {
        self.events = events.to_vec();
        tracing::debug!(count = self.events.len(), "Event store initialised");
    }

    pub fn events(&self) -> &[TripEvent] {
        &self.events
    }

    pub fn get_event(&self, id: Uuid) -> Option<&TripEvent> {
        find_event(&self.events, id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Registers a subscriber for `(UpdateKind, &TripEvent)` notifications.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(UpdateKind, &TripEvent) + 'static,
    {
        self.observer.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observer.unsubscribe(id)
    }

    /// Prepends `event` and notifies.
    pub fn add_event(&mut self, kind: UpdateKind, event: TripEvent) {
        tracing::debug!(id = %event.id, ?kind, "Adding event");
        self.events.insert(0, event.clone());
        self.observer.notify(kind, &event);
    }

    /// Replaces the event with the same ID in place and notifies.
    ///
    /// An unknown ID leaves the collection unchanged but still notifies.
    /// Returns whether an event was replaced.
    pub fn update_event(&mut self, kind: UpdateKind, event: TripEvent) -> bool {
        let replaced = replace_event(&mut self.events, &event);
        if replaced {
            tracing::debug!(id = %event.id, ?kind, "Updated event");
        } else {
            tracing::warn!(id = %event.id, ?kind, "Update for unknown event");
        }
        self.observer.notify(kind, &event);
        replaced
    }

    /// Removes the event with the same ID and notifies.
    ///
    /// An unknown ID leaves the collection unchanged but still notifies.
    /// Returns whether an event was removed.
    pub fn delete_event(&mut self, kind: UpdateKind, event: &TripEvent) -> bool {
        let removed = remove_event(&mut self.events, event.id);
        if removed {
            tracing::debug!(id = %event.id, ?kind, "Deleted event");
        } else {
            tracing::warn!(id = %event.id, ?kind, "Delete for unknown event");
        }
        self.observer.notify(kind, event);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Destination, EventKind};
    use chrono::{Duration, NaiveDate};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(UpdateKind, Uuid)>>>;

    fn make_event(n: u128) -> TripEvent {
        let start = NaiveDate::from_ymd_opt(2024, 3, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        TripEvent::new(
            EventKind::Train,
            Destination::new("Geneva"),
            start,
            start + Duration::hours(2),
            40,
        )
        .with_id(Uuid::from_u128(n))
    }

    fn store_with_log(events: &[TripEvent]) -> (EventStore, Log) {
        let log: Log = Rc::default();
        let mut store = EventStore::new();
        store.set_events(events);
        let sink = Rc::clone(&log);
        store.subscribe(move |kind, event| sink.borrow_mut().push((kind, event.id)));
        (store, log)
    }

    fn ids(store: &EventStore) -> Vec<u128> {
        store.events().iter().map(|e| e.id.as_u128()).collect()
    }

    #[test]
    fn test_set_events_copies_and_does_not_notify() {
        let mut source = vec![make_event(1), make_event(2)];
        let (store, log) = store_with_log(&source);

        source[0].price = 1;
        source.push(make_event(3));

        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.events()[0].price, 40);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_add_event_prepends_and_notifies_once() {
        let (mut store, log) = store_with_log(&[make_event(1), make_event(2)]);

        store.add_event(UpdateKind::Minor, make_event(3));

        assert_eq!(ids(&store), vec![3, 1, 2]);
        assert_eq!(*log.borrow(), vec![(UpdateKind::Minor, Uuid::from_u128(3))]);
    }

    #[test]
    fn test_update_event_replaces_in_place() {
        let (mut store, log) = store_with_log(&[make_event(1), make_event(2), make_event(3)]);
        let mut updated = make_event(2);
        updated.price = 500;

        assert!(store.update_event(UpdateKind::Patch, updated));

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.events()[1].price, 500);
        assert_eq!(*log.borrow(), vec![(UpdateKind::Patch, Uuid::from_u128(2))]);
    }

    #[test]
    fn test_update_unknown_event_still_notifies() {
        let (mut store, log) = store_with_log(&[make_event(1)]);
        let before = store.events().to_vec();

        assert!(!store.update_event(UpdateKind::Patch, make_event(9)));

        assert_eq!(store.events(), before.as_slice());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_delete_event() {
        let (mut store, log) = store_with_log(&[make_event(1), make_event(2)]);

        assert!(store.delete_event(UpdateKind::Minor, &make_event(1)));
        assert_eq!(ids(&store), vec![2]);

        assert!(!store.delete_event(UpdateKind::Minor, &make_event(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_get_event() {
        let (store, _) = store_with_log(&[make_event(1), make_event(2)]);
        assert_eq!(store.get_event(Uuid::from_u128(2)), Some(&make_event(2)));
        assert!(store.get_event(Uuid::from_u128(5)).is_none());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = EventStore::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.add_event(UpdateKind::Minor, make_event(1));
        assert!(store.unsubscribe(id));
        store.add_event(UpdateKind::Minor, make_event(2));

        assert_eq!(*count.borrow(), 1);
    }
}
