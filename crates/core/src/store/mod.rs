mod events;
mod observer;

pub use events::EventStore;
pub use observer::{Observer, Subscriber, SubscriptionId};
