use chrono::NaiveDate;

use super::types::{EventSortType, SortOrder, TripDay, TripEvent};

/// How events are laid out on the board for a given sort mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripLayout {
    /// One bucket per calendar day, in chronological order.
    Days(Vec<TripDay>),
    /// A single ungrouped bucket.
    Flat(Vec<TripEvent>),
}

impl TripLayout {
    /// Total number of events across all buckets.
    pub fn event_count(&self) -> usize {
        match self {
            TripLayout::Days(days) => days.iter().map(TripDay::event_count).sum(),
            TripLayout::Flat(events) => events.len(),
        }
    }
}

/// Returns the distinct start days of the given events, ascending.
pub fn unique_trip_days(events: &[TripEvent]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = events.iter().map(TripEvent::day).collect();
    days.sort();
    days.dedup();
    days
}

/// Groups events into numbered day buckets.
///
/// Days are numbered from 1 in ascending date order. Within a day events keep
/// their relative order from `events`.
pub fn build_trip_days(events: &[TripEvent]) -> Vec<TripDay> {
    unique_trip_days(events)
        .into_iter()
        .enumerate()
        .map(|(idx, date)| {
            let day_events = events
                .iter()
                .filter(|event| event.day() == date)
                .cloned()
                .collect();

            TripDay::new(idx + 1, date, day_events)
        })
        .collect()
}

/// Sorts events by duration (end - start). The sort is stable.
pub fn sort_events_by_duration(order: SortOrder, events: &[TripEvent]) -> Vec<TripEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = a.duration().cmp(&b.duration());
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
    sorted
}

/// Sorts events by base price. The sort is stable.
pub fn sort_events_by_price(order: SortOrder, events: &[TripEvent]) -> Vec<TripEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = a.price.cmp(&b.price);
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
    sorted
}

/// Lays out events for the given sort mode.
///
/// `Event` groups by day, `Time` is shortest first and `Price` is most
/// expensive first.
pub fn layout_events(sort_type: EventSortType, events: &[TripEvent]) -> TripLayout {
    match sort_type {
        EventSortType::Event => TripLayout::Days(build_trip_days(events)),
        EventSortType::Time => {
            TripLayout::Flat(sort_events_by_duration(SortOrder::Asc, events))
        }
        EventSortType::Price => TripLayout::Flat(sort_events_by_price(SortOrder::Desc, events)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::types::{Destination, EventKind};
    use chrono::{Duration, NaiveDateTime};
    use uuid::Uuid;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_datetime(day: u32, hour: u32) -> NaiveDateTime {
        make_date(2024, 1, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn make_event(n: u128, start: NaiveDateTime, hours: i64, price: u32) -> TripEvent {
        TripEvent::new(
            EventKind::Bus,
            Destination::new("Geneva"),
            start,
            start + Duration::hours(hours),
            price,
        )
        .with_id(Uuid::from_u128(n))
    }

    fn ids(events: &[TripEvent]) -> Vec<u128> {
        events.iter().map(|e| e.id.as_u128()).collect()
    }

    #[test]
    fn test_unique_trip_days_sorted_and_deduplicated() {
        let events = vec![
            make_event(1, make_datetime(3, 9), 1, 10),
            make_event(2, make_datetime(1, 18), 1, 10),
            make_event(3, make_datetime(1, 7), 1, 10),
        ];

        assert_eq!(
            unique_trip_days(&events),
            vec![make_date(2024, 1, 1), make_date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_build_trip_days_numbers_and_order() {
        let events = vec![
            make_event(1, make_datetime(1, 9), 1, 10),
            make_event(2, make_datetime(1, 8), 1, 10),
            make_event(3, make_datetime(3, 9), 1, 10),
        ];

        let days = build_trip_days(&events);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].number, 1);
        assert_eq!(days[0].date, make_date(2024, 1, 1));
        // Original relative order is kept within a day
        assert_eq!(ids(&days[0].events), vec![1, 2]);
        assert_eq!(days[1].number, 2);
        assert_eq!(days[1].date, make_date(2024, 1, 3));
        assert_eq!(ids(&days[1].events), vec![3]);
    }

    #[test]
    fn test_build_trip_days_ignores_time_of_day() {
        let events = vec![
            make_event(1, make_datetime(2, 0), 1, 10),
            make_event(2, make_datetime(2, 23), 1, 10),
        ];

        let days = build_trip_days(&events);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].event_count(), 2);
    }

    #[test]
    fn test_build_trip_days_empty() {
        assert!(build_trip_days(&[]).is_empty());
    }

    #[test]
    fn test_sort_by_duration_ascending() {
        let events = vec![
            make_event(1, make_datetime(1, 9), 3, 10),
            make_event(2, make_datetime(1, 9), 1, 10),
            make_event(3, make_datetime(1, 9), 2, 10),
        ];

        let sorted = sort_events_by_duration(SortOrder::Asc, &events);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);

        let sorted = sort_events_by_duration(SortOrder::Desc, &events);
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let events = vec![
            make_event(1, make_datetime(1, 9), 1, 50),
            make_event(2, make_datetime(1, 9), 1, 200),
            make_event(3, make_datetime(1, 9), 1, 10),
        ];

        let sorted = sort_events_by_price(SortOrder::Desc, &events);
        let prices: Vec<u32> = sorted.iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![200, 50, 10]);
    }

    #[test]
    fn test_layout_events_per_sort_type() {
        let events = vec![
            make_event(1, make_datetime(2, 9), 3, 50),
            make_event(2, make_datetime(1, 9), 1, 200),
            make_event(3, make_datetime(1, 12), 2, 10),
        ];

        match layout_events(EventSortType::Event, &events) {
            TripLayout::Days(days) => {
                assert_eq!(days.len(), 2);
                assert_eq!(ids(&days[0].events), vec![2, 3]);
            }
            other => panic!("Expected day layout, got {:?}", other),
        }

        assert_eq!(
            layout_events(EventSortType::Time, &events),
            TripLayout::Flat(sort_events_by_duration(SortOrder::Asc, &events))
        );

        let layout = layout_events(EventSortType::Price, &events);
        assert_eq!(layout.event_count(), 3);
        match layout {
            TripLayout::Flat(sorted) => assert_eq!(ids(&sorted), vec![2, 1, 3]),
            other => panic!("Expected flat layout, got {:?}", other),
        }
    }
}
