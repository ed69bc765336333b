//! Mock data generation for testing and seeding.
//!
//! Pure functions with no side effects, usable from unit tests and from the
//! terminal host when no events file is given.

use chrono::{Duration, NaiveDate};

use super::types::{Destination, EventKind, Offer, TripEvent};

const CITIES: [(&str, &str); 5] = [
    ("Amsterdam", "Canals, bikes and the Rijksmuseum."),
    ("Geneva", "A lakeside city at the foot of the Alps."),
    ("Chamonix", "Base camp for Mont Blanc."),
    ("Saint Petersburg", "White nights and the Hermitage."),
    ("Moscow", "The Kremlin and Red Square."),
];

/// Offers available for a given event kind.
pub fn offers_for_kind(kind: EventKind) -> Vec<Offer> {
    match kind {
        EventKind::Flight => vec![
            Offer::new("Add luggage", 30),
            Offer::new("Switch to comfort class", 100),
            Offer::new("Add meal", 15),
            Offer::new("Choose seats", 5),
        ],
        EventKind::Taxi => vec![Offer::new("Order Uber", 20)],
        EventKind::Drive => vec![Offer::new("Rent a car", 200)],
        EventKind::CheckIn => vec![Offer::new("Add breakfast", 50)],
        EventKind::Sightseeing => vec![
            Offer::new("Book tickets", 40),
            Offer::new("Lunch in city", 30),
        ],
        EventKind::Train => vec![Offer::new("Travel by train", 40)],
        _ => Vec::new(),
    }
}

/// Generate mock trip events starting on `start_date`.
///
/// Events are spread over roughly `count / 3` days, two to four per day,
/// with kinds, prices and durations cycling through fixed tables so the
/// output is deterministic.
///
/// # Example
///
/// ```
/// use tripboard_core::trip::generate_seed_events;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
/// let events = generate_seed_events(start, 8);
///
/// assert_eq!(events.len(), 8);
/// ```
pub fn generate_seed_events(start_date: NaiveDate, count: u32) -> Vec<TripEvent> {
    let prices = [20, 160, 600, 35, 80, 120, 15, 300];
    let durations_min = [30, 150, 45, 90, 240, 60, 20, 120];

    let mut events = Vec::with_capacity(count as usize);

    for i in 0..count {
        let idx = i as usize;
        let kind = EventKind::ALL[idx % EventKind::ALL.len()];
        let (city, description) = CITIES[(idx / 3) % CITIES.len()];

        let day = start_date + Duration::days((i / 3) as i64);
        let Some(start) = day.and_hms_opt(8 + (i % 3) * 4, (i % 4) * 15, 0) else {
            continue;
        };
        let end = start + Duration::minutes(durations_min[idx % durations_min.len()]);

        let mut event = TripEvent::new(
            kind,
            Destination::new(city).with_description(description),
            start,
            end,
            prices[idx % prices.len()],
        )
        .with_favorite(i % 5 == 0);

        if let Some(offer) = offers_for_kind(kind).into_iter().next() {
            event = event.with_offer(offer);
        }

        events.push(event);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::sorting::build_trip_days;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    #[test]
    fn test_generate_seed_events_count() {
        assert_eq!(generate_seed_events(start(), 0).len(), 0);
        assert_eq!(generate_seed_events(start(), 10).len(), 10);
    }

    #[test]
    fn test_generate_seed_events_spread_over_days() {
        let events = generate_seed_events(start(), 9);
        let days = build_trip_days(&events);

        assert_eq!(days.len(), 3);
        assert!(days.iter().all(|day| day.event_count() == 3));
        assert_eq!(days[0].date, start());
    }

    #[test]
    fn test_generate_seed_events_unique_ids() {
        let events = generate_seed_events(start(), 12);
        let mut ids: Vec<_> = events.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_generate_seed_events_end_after_start() {
        let events = generate_seed_events(start(), 16);
        assert!(events.iter().all(|e| e.end > e.start));
    }

    #[test]
    fn test_offers_for_kind() {
        assert_eq!(offers_for_kind(EventKind::Flight).len(), 4);
        assert!(offers_for_kind(EventKind::Ship).is_empty());
    }
}
