//! Route Summary
//!
//! Helpers for the header's route title, dates and total cost.

use waypoint_list::Waypoint;

/// Destinations shown in full before the title collapses to first/last
const MAX_FULL_ROUTE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSummary {
    pub title: String,
    pub dates: String,
    pub cost: u64,
}

/// Summarize `points`, which are expected in trip order
pub fn summarize(points: &[Waypoint]) -> RouteSummary {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return RouteSummary::default();
    };

    // Consecutive stops in the same city count once
    let mut cities: Vec<&str> = points.iter().map(|p| p.destination.name.as_str()).collect();
    cities.dedup();
    let title = if cities.len() > MAX_FULL_ROUTE {
        format!("{} — … — {}", cities[0], cities[cities.len() - 1])
    } else {
        cities.join(" — ")
    };

    let start = first.date_from;
    let end = last.date_to;
    let dates = if start.format("%b").to_string() == end.format("%b").to_string() {
        format!("{} — {}", start.format("%b %d"), end.format("%d"))
    } else {
        format!("{} — {}", start.format("%b %d"), end.format("%b %d"))
    };

    let cost = points
        .iter()
        .flat_map(|p| std::iter::once(p.base_price).chain(p.chosen_offers().map(|o| o.price)))
        .map(u64::from)
        .sum();

    RouteSummary { title, dates, cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_list::mock::{mock_point, mock_points};

    #[test]
    fn test_empty_route() {
        assert_eq!(summarize(&[]), RouteSummary::default());
    }

    #[test]
    fn test_short_route_lists_every_city() {
        let points = mock_points(3);
        let summary = summarize(&points);
        assert_eq!(summary.title, "Amsterdam — Chamonix — Geneva");
        assert_eq!(summary.dates, "Mar 18 — 18");
    }

    #[test]
    fn test_long_route_collapses() {
        let summary = summarize(&mock_points(5));
        assert_eq!(summary.title, "Amsterdam — … — Tokyo");
    }

    #[test]
    fn test_repeated_city_counts_once() {
        let mut a = mock_point(0);
        let mut b = mock_point(1);
        b.destination = a.destination.clone();
        a.selected_offers.clear();
        b.selected_offers.clear();
        let summary = summarize(&[a.clone(), b.clone()]);
        assert_eq!(summary.title, "Amsterdam");
        assert_eq!(summary.cost, u64::from(a.base_price + b.base_price));
    }

    #[test]
    fn test_cost_includes_chosen_offers() {
        let point = mock_point(3);
        let offers: u32 = point.chosen_offers().map(|o| o.price).sum();
        assert!(offers > 0);
        assert_eq!(summarize(&[point.clone()]).cost, u64::from(point.base_price + offers));
    }

    #[test]
    fn test_cost_beyond_u32() {
        let mut a = mock_point(0);
        a.base_price = u32::MAX;
        a.selected_offers.clear();
        let mut b = a.clone();
        b.base_price = 1;
        assert_eq!(summarize(&[a, b]).cost, u64::from(u32::MAX) + 1);
    }
}
