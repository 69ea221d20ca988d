//! Display form of a single point

use chrono::Duration;

use super::{escape, View};
use crate::model::Waypoint;
use crate::session::SessionId;

/// Read-only row for one point, carrying the rollup affordance
#[derive(Debug, Clone)]
pub struct WaypointView {
    session: SessionId,
    point: Waypoint,
}

impl WaypointView {
    pub fn new(session: SessionId, point: &Waypoint) -> Self {
        Self {
            session,
            point: point.clone(),
        }
    }

    pub fn point(&self) -> &Waypoint {
        &self.point
    }
}

/// `01D 02H 30M`, dropping leading zero units
pub(crate) fn format_duration(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}

impl View for WaypointView {
    fn template(&self) -> String {
        let point = &self.point;
        let offers: String = point
            .chosen_offers()
            .map(|offer| {
                format!(
                    r#"<li class="event__offer">
                  <span class="event__offer-title">{}</span>
                  &plus;&euro;&nbsp;
                  <span class="event__offer-price">{}</span>
                </li>"#,
                    escape(&offer.title),
                    offer.price,
                )
            })
            .collect();
        let favorite = if point.is_favorite { " event__favorite-btn--active" } else { "" };

        format!(
            r#"<li class="trip-events__item" data-session="{session}">
              <div class="event">
                <time class="event__date" datetime="{date}">{day}</time>
                <div class="event__type">
                  <img class="event__type-icon" width="42" height="42" src="img/icons/{icon}.png" alt="Event type icon">
                </div>
                <h3 class="event__title">{label} {destination}</h3>
                <div class="event__schedule">
                  <p class="event__time">
                    <time class="event__start-time" datetime="{from_attr}">{from}</time>
                    &mdash;
                    <time class="event__end-time" datetime="{to_attr}">{to}</time>
                  </p>
                  <p class="event__duration">{duration}</p>
                </div>
                <p class="event__price">
                  &euro;&nbsp;<span class="event__price-value">{price}</span>
                </p>
                <h4 class="visually-hidden">Offers:</h4>
                <ul class="event__selected-offers">{offers}</ul>
                <button class="event__favorite-btn{favorite}" type="button">
                  <span class="visually-hidden">Add to favorite</span>
                </button>
                <button class="event__rollup-btn" type="button">
                  <span class="visually-hidden">Open event</span>
                </button>
              </div>
            </li>"#,
            session = self.session,
            date = point.date_from.format("%Y-%m-%d"),
            day = point.date_from.format("%b %d").to_string().to_uppercase(),
            icon = point.event_type.as_str(),
            label = point.event_type.label(),
            destination = escape(&point.destination.name),
            from_attr = point.date_from.format("%Y-%m-%dT%H:%M"),
            from = point.date_from.format("%H:%M"),
            to_attr = point.date_to.format("%Y-%m-%dT%H:%M"),
            to = point.date_to.format("%H:%M"),
            duration = format_duration(point.duration()),
            price = point.base_price,
        )
    }
}
