mod error;
mod mock_data;
mod operations;
mod sorting;
mod types;

pub use error::{Result, TripError};
pub use mock_data::{generate_seed_events, offers_for_kind};
pub use operations::{find_event, remove_event, replace_event, unique_destinations};
pub use sorting::{
    build_trip_days, layout_events, sort_events_by_duration, sort_events_by_price,
    unique_trip_days, TripLayout,
};
pub use types::{
    Destination, EventKind, EventSortType, Offer, SortOrder, TripDay, TripEvent, UpdateKind,
    UserAction,
};
