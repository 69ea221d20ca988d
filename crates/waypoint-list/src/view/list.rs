//! Static list chrome: sorting header, list container, empty state

use super::View;

const SORT_ITEMS: &[(&str, &str, bool)] = &[
    ("day", "Day", false),
    ("event", "Event", true),
    ("time", "Time", false),
    ("price", "Price", false),
    ("offer", "Offers", true),
];

/// Sorting header shown above a non-empty list
#[derive(Debug, Clone, Copy, Default)]
pub struct SortingView;

impl View for SortingView {
    fn template(&self) -> String {
        let items: String = SORT_ITEMS
            .iter()
            .enumerate()
            .map(|(i, (name, label, disabled))| {
                format!(
                    r#"<div class="trip-sort__item  trip-sort__item--{name}">
                <input id="sort-{name}" class="trip-sort__input  visually-hidden" type="radio" name="trip-sort" value="sort-{name}"{checked}{disabled}>
                <label class="trip-sort__btn" for="sort-{name}">{label}</label>
              </div>"#,
                    checked = if i == 0 { " checked" } else { "" },
                    disabled = if *disabled { " disabled" } else { "" },
                )
            })
            .collect();

        format!(r##"<form class="trip-events__trip-sort  trip-sort" action="#" method="get">{items}</form>"##)
    }
}

/// Container the point items are mounted into
#[derive(Debug, Clone, Copy, Default)]
pub struct TripEventsListView;

impl View for TripEventsListView {
    fn template(&self) -> String {
        r#"<ul class="trip-events__list"></ul>"#.to_string()
    }
}

/// Shown instead of the list when there are no points
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPointsView;

impl View for NoPointsView {
    fn template(&self) -> String {
        r#"<p class="trip-events__msg">Click New Event to create your first point</p>"#.to_string()
    }
}
