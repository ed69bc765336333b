mod event;
mod listener;
mod traits;
mod trip;
mod types;

#[cfg(test)]
mod testing;

pub use event::EventPresenter;
pub use listener::KeyListenerGuard;
pub use traits::{Board, Dispatcher, ShakeCallback};
pub use trip::TripPresenter;
pub use types::{
    ComponentId, DayHeader, EventIntent, EventMode, EventState, FormState, FormStatePatch,
    KeyListenerId, KeyboardKey, RenderPosition, TripDayComponents,
};
