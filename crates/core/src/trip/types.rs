use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_timestamp, serialize_timestamp};

/// The kind of trip event, determining its icon and which offers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Taxi,
    Bus,
    Train,
    Ship,
    Transport,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventKind {
    /// All event kinds, in the order the edit form lists them.
    pub const ALL: [EventKind; 10] = [
        EventKind::Taxi,
        EventKind::Bus,
        EventKind::Train,
        EventKind::Ship,
        EventKind::Transport,
        EventKind::Drive,
        EventKind::Flight,
        EventKind::CheckIn,
        EventKind::Sightseeing,
        EventKind::Restaurant,
    ];

    /// Returns true for kinds that move the traveller between places.
    pub fn is_transfer(&self) -> bool {
        !matches!(
            self,
            EventKind::CheckIn | EventKind::Sightseeing | EventKind::Restaurant
        )
    }

    /// Returns the preposition used in the event title ("Taxi to", "Check-in in").
    pub fn preposition(&self) -> &'static str {
        if self.is_transfer() {
            "to"
        } else {
            "in"
        }
    }

    /// Returns the display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Taxi => "Taxi",
            EventKind::Bus => "Bus",
            EventKind::Train => "Train",
            EventKind::Ship => "Ship",
            EventKind::Transport => "Transport",
            EventKind::Drive => "Drive",
            EventKind::Flight => "Flight",
            EventKind::CheckIn => "Check-in",
            EventKind::Sightseeing => "Sightseeing",
            EventKind::Restaurant => "Restaurant",
        }
    }
}

/// The place an event takes the traveller to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Destination {
    /// Creates a destination with an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description for this destination.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An add-on selected for an event (extra luggage, meal, seat upgrade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    pub price: u32,
}

impl Offer {
    pub fn new(title: impl Into<String>, price: u32) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

/// A single trip activity or leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEvent {
    pub id: Uuid,
    pub kind: EventKind,
    pub destination: Destination,
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub start: NaiveDateTime,
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub end: NaiveDateTime,
    pub price: u32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl TripEvent {
    /// Creates a new event with a fresh ID and no offers.
    pub fn new(
        kind: EventKind,
        destination: Destination,
        start: NaiveDateTime,
        end: NaiveDateTime,
        price: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            destination,
            start,
            end,
            price,
            is_favorite: false,
            offers: Vec::new(),
        }
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Adds an offer to this event.
    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.offers.push(offer);
        self
    }

    /// Marks this event as a favorite.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// The time between start and end.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The calendar day the event starts on.
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns a copy with the favorite flag flipped.
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }

    /// Returns true if both start and end match `other`.
    pub fn has_same_schedule(&self, other: &TripEvent) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Title as shown on the event card ("Flight to Geneva").
    pub fn title(&self) -> String {
        format!(
            "{} {} {}",
            self.kind.label(),
            self.kind.preposition(),
            self.destination.name
        )
    }
}

/// Classification of a mutation's render cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateKind {
    /// Only the affected event needs redrawing.
    Patch,
    /// The day list needs redrawing.
    Minor,
    /// The whole board is rebuilt from scratch.
    Major,
}

/// Kind of change a presenter asks the dispatcher to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    UpdateEvent,
    DeleteEvent,
    AddEvent,
}

/// How the trip board orders events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSortType {
    /// Chronological, grouped by day.
    #[default]
    Event,
    /// Shortest events first, single bucket.
    Time,
    /// Most expensive events first, single bucket.
    Price,
}

impl EventSortType {
    pub const ALL: [EventSortType; 3] =
        [EventSortType::Event, EventSortType::Time, EventSortType::Price];

    pub fn label(&self) -> &'static str {
        match self {
            EventSortType::Event => "event",
            EventSortType::Time => "time",
            EventSortType::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Events that started on one calendar day, numbered from the trip start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDay {
    /// 1-based position of the day within the trip.
    pub number: usize,
    pub date: NaiveDate,
    pub events: Vec<TripEvent>,
}

impl TripDay {
    pub fn new(number: usize, date: NaiveDate, events: Vec<TripEvent>) -> Self {
        Self {
            number,
            date,
            events,
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
