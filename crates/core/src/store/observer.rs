//! Synchronous publish/subscribe primitive.
//!
//! Subscribers are invoked in registration order on the calling thread.
//! Registering the same closure twice delivers every notification twice.

use std::fmt;

use crate::trip::UpdateKind;

/// Callback invoked with the update kind and the payload of a mutation.
pub type Subscriber<T> = Box<dyn FnMut(UpdateKind, &T)>;

/// Handle returned by [`Observer::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fan-out of `(UpdateKind, &T)` notifications to registered subscribers.
pub struct Observer<T> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

impl<T> Observer<T> {
    /// Creates an observer with no subscribers.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber and returns its handle.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(UpdateKind, &T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Invokes every subscriber, in registration order.
    pub fn notify(&mut self, kind: UpdateKind, payload: &T) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(kind, payload);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> Default for Observer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut observer: Observer<u32> = Observer::new();

        let first = Rc::clone(&log);
        observer.subscribe(move |kind, value| first.borrow_mut().push(format!("a:{kind:?}:{value}")));
        let second = Rc::clone(&log);
        observer.subscribe(move |kind, value| second.borrow_mut().push(format!("b:{kind:?}:{value}")));

        observer.notify(UpdateKind::Patch, &7);

        assert_eq!(*log.borrow(), vec!["a:Patch:7", "b:Patch:7"]);
    }

    #[test]
    fn test_duplicate_subscription_is_not_deduplicated() {
        let count = Rc::new(RefCell::new(0));
        let mut observer: Observer<()> = Observer::new();

        for _ in 0..2 {
            let count = Rc::clone(&count);
            observer.subscribe(move |_, _| *count.borrow_mut() += 1);
        }
        observer.notify(UpdateKind::Minor, &());

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut observer: Observer<()> = Observer::new();

        let counter = Rc::clone(&count);
        let id = observer.subscribe(move |_, _| *counter.borrow_mut() += 1);
        assert_eq!(observer.subscriber_count(), 1);

        assert!(observer.unsubscribe(id));
        assert!(!observer.unsubscribe(id));
        observer.notify(UpdateKind::Minor, &());

        assert_eq!(*count.borrow(), 0);
        assert_eq!(observer.subscriber_count(), 0);
    }

    #[test]
    fn test_notify_without_subscribers() {
        let mut observer: Observer<u32> = Observer::default();
        observer.notify(UpdateKind::Major, &1);
    }
}
