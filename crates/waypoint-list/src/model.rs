//! Waypoint Model
//!
//! Read-only point records handed to the list by a [`PointSource`](crate::source::PointSource).

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Core trait for records that carry a stable identifier
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Kind of trip event a waypoint describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    #[default]
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::Taxi,
        EventType::Bus,
        EventType::Train,
        EventType::Ship,
        EventType::Drive,
        EventType::Flight,
        EventType::CheckIn,
        EventType::Sightseeing,
        EventType::Restaurant,
    ];

    /// Identifier used in markup (icons, radio values)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Taxi => "taxi",
            EventType::Bus => "bus",
            EventType::Train => "train",
            EventType::Ship => "ship",
            EventType::Drive => "drive",
            EventType::Flight => "flight",
            EventType::CheckIn => "check-in",
            EventType::Sightseeing => "sightseeing",
            EventType::Restaurant => "restaurant",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Taxi => "Taxi",
            EventType::Bus => "Bus",
            EventType::Train => "Train",
            EventType::Ship => "Ship",
            EventType::Drive => "Drive",
            EventType::Flight => "Flight",
            EventType::CheckIn => "Check-in",
            EventType::Sightseeing => "Sightseeing",
            EventType::Restaurant => "Restaurant",
        }
    }
}

/// An extra that can be booked with a waypoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u32,
    pub title: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub description: String,
}

/// A single trip waypoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique identifier
    pub id: u32,
    pub event_type: EventType,
    pub destination: Destination,
    /// Start of the event
    pub date_from: NaiveDateTime,
    /// End of the event
    pub date_to: NaiveDateTime,
    /// Price without offers
    pub base_price: u32,
    /// Offers available for this event type
    pub offers: Vec<Offer>,
    /// Ids of offers the user picked
    #[serde(default)]
    pub selected_offers: Vec<u32>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Waypoint {
    /// Time between start and end, never negative
    pub fn duration(&self) -> Duration {
        let d = self.date_to - self.date_from;
        if d < Duration::zero() {
            Duration::zero()
        } else {
            d
        }
    }

    pub fn is_offer_selected(&self, offer_id: u32) -> bool {
        self.selected_offers.contains(&offer_id)
    }

    /// Offers the user picked, in offer order
    pub fn chosen_offers(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|o| self.is_offer_selected(o.id))
    }
}

/// Identifier of a [`Waypoint`]
pub type PointId = <Waypoint as Entity>::Id;

impl Entity for Waypoint {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn make_point(from: NaiveDateTime, to: NaiveDateTime) -> Waypoint {
        Waypoint {
            id: 7,
            event_type: EventType::Taxi,
            destination: Destination {
                name: "Geneva".to_string(),
                description: String::new(),
            },
            date_from: from,
            date_to: to,
            base_price: 20,
            offers: vec![
                Offer { id: 1, title: "Upgrade".to_string(), price: 50 },
                Offer { id: 2, title: "Radio".to_string(), price: 5 },
            ],
            selected_offers: vec![2],
            is_favorite: false,
        }
    }

    #[test]
    fn test_duration() {
        let point = make_point(at(18, 10), at(18, 12));
        assert_eq!(point.duration(), Duration::hours(2));
        assert_eq!(point.id(), 7);
    }

    #[test]
    fn test_inverted_bounds_have_zero_duration() {
        let point = make_point(at(19, 10), at(18, 10));
        assert_eq!(point.duration(), Duration::zero());
    }

    #[test]
    fn test_chosen_offers() {
        let point = make_point(at(18, 10), at(18, 12));
        let chosen: Vec<_> = point.chosen_offers().map(|o| o.id).collect();
        assert_eq!(chosen, vec![2]);
        assert!(!point.is_offer_selected(1));
    }

    #[test]
    fn test_event_type_serialization() {
        assert_eq!(EventType::CheckIn.as_str(), "check-in");
        let json = serde_json::to_string(&EventType::CheckIn).unwrap();
        assert_eq!(json, "\"check-in\"");
    }
}
