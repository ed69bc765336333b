//! tripboard_core - event store, day bucketing and presenters for the trip board.
//!
//! Everything here is synchronous and free of I/O. Rendering and persistence
//! are reached through the [`presenter::Board`] and [`presenter::Dispatcher`]
//! traits.

pub mod presenter;
pub mod serde;
pub mod store;
pub mod trip;
