//! Sample Data
//!
//! Deterministic waypoint generator for demos and tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::model::{Destination, EventType, Offer, Waypoint};

const DESTINATIONS: &[(&str, &str)] = &[
    ("Amsterdam", "Canals, bicycles and a lot of museums."),
    ("Chamonix", "A resort at the foot of Mont Blanc."),
    ("Geneva", "A city on the shore of the largest alpine lake."),
    ("Rome", "Ancient ruins next to every coffee bar."),
    ("Tokyo", "Neon streets and quiet temples."),
];

const OFFER_TITLES: &[(&str, u32)] = &[
    ("Add luggage", 30),
    ("Switch to comfort", 100),
    ("Add meal", 15),
    ("Choose seats", 5),
    ("Travel by train", 40),
];

fn trip_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 18)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// Build the sample point for `seed`. The same seed always yields the same point.
pub fn mock_point(seed: u32) -> Waypoint {
    let idx = seed as usize;
    let event_type = EventType::ALL[idx % EventType::ALL.len()];
    let (name, description) = DESTINATIONS[idx % DESTINATIONS.len()];

    let offers: Vec<Offer> = (0..(idx % 4) as u32)
        .map(|n| {
            let (title, price) = OFFER_TITLES[(idx + n as usize) % OFFER_TITLES.len()];
            Offer {
                id: seed.wrapping_mul(10).wrapping_add(n + 1),
                title: title.to_string(),
                price,
            }
        })
        .collect();
    let selected_offers = offers.iter().step_by(2).map(|o| o.id).collect();

    let date_from = trip_start()
        .checked_add_signed(Duration::hours(i64::from(seed) * 5))
        .unwrap_or(NaiveDateTime::MAX);
    let date_to = date_from
        .checked_add_signed(Duration::minutes(30 + i64::from(seed % 7) * 45))
        .unwrap_or(date_from);

    Waypoint {
        id: seed.wrapping_add(1),
        event_type,
        destination: Destination {
            name: name.to_string(),
            description: description.to_string(),
        },
        date_from,
        date_to,
        base_price: 20 + seed.wrapping_mul(37) % 480,
        offers,
        selected_offers,
        is_favorite: seed % 3 == 0,
    }
}

/// `count` sample points in chronological order.
///
/// Seeds are `u32`, so `count` is capped at `u32::MAX`.
pub fn mock_points(count: usize) -> Vec<Waypoint> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    (0..count).map(mock_point).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_is_deterministic() {
        assert_eq!(mock_point(4), mock_point(4));
        assert_ne!(mock_point(4), mock_point(5));
    }

    #[test]
    fn test_mock_points_are_ordered_and_unique() {
        let points = mock_points(12);
        assert_eq!(points.len(), 12);
        for pair in points.windows(2) {
            assert!(pair[0].date_from < pair[1].date_from);
            assert_ne!(pair[0].id, pair[1].id);
        }
        assert!(points.iter().all(|p| p.date_to > p.date_from));
    }

    #[test]
    fn test_large_seed_does_not_overflow() {
        let point = mock_point(u32::MAX);
        assert_eq!(point.id, 0);
        assert!(point.base_price >= 20 && point.base_price < 500);
        assert!(point.offers.iter().all(|o| o.price > 0));
    }
}
