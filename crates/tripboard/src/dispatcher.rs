//! Dispatcher that queues user actions for the session loop.

use tripboard_core::presenter::Dispatcher;
use tripboard_core::trip::{TripEvent, UpdateKind, UserAction};

/// A change requested by a presenter, waiting to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: UserAction,
    pub kind: UpdateKind,
    pub event: TripEvent,
}

/// Collects actions so they can be applied after the presenter call returns.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<PendingAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every queued action, oldest first.
    pub fn drain(&mut self) -> Vec<PendingAction> {
        std::mem::take(&mut self.pending)
    }
}

impl Dispatcher for ActionQueue {
    fn change_event(&mut self, action: UserAction, kind: UpdateKind, event: TripEvent) {
        tracing::debug!(?action, ?kind, id = %event.id, "Queued change");
        self.pending.push(PendingAction {
            action,
            kind,
            event,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripboard_core::trip::generate_seed_events;

    #[test]
    fn test_queue_and_drain() {
        let events = generate_seed_events(chrono::NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(), 2);
        let mut queue = ActionQueue::new();
        assert!(queue.is_empty());

        queue.change_event(UserAction::UpdateEvent, UpdateKind::Patch, events[0].clone());
        queue.change_event(UserAction::DeleteEvent, UpdateKind::Minor, events[1].clone());

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].action, UserAction::UpdateEvent);
        assert_eq!(drained[1].event, events[1]);
        assert!(queue.is_empty());
    }
}
