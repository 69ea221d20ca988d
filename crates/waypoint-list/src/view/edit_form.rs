//! Edit form for a single point

use super::{escape, View};
use crate::model::{EventType, Waypoint};
use crate::session::SessionId;

const DATE_INPUT_FORMAT: &str = "%d/%m/%y %H:%M";

/// Inline edit form, mounted in place of the [`WaypointView`](super::WaypointView)
#[derive(Debug, Clone)]
pub struct EditFormView {
    session: SessionId,
    point: Waypoint,
}

impl EditFormView {
    pub fn new(session: SessionId, point: &Waypoint) -> Self {
        Self {
            session,
            point: point.clone(),
        }
    }

    pub fn point(&self) -> &Waypoint {
        &self.point
    }

    fn type_items(&self) -> String {
        let id = self.point.id;
        EventType::ALL
            .iter()
            .map(|kind| {
                let value = kind.as_str();
                let checked = if *kind == self.point.event_type { " checked" } else { "" };
                format!(
                    r#"<div class="event__type-item">
                          <input id="event-type-{value}-{id}" class="event__type-input  visually-hidden" type="radio" name="event-type" value="{value}"{checked}>
                          <label class="event__type-label  event__type-label--{value}" for="event-type-{value}-{id}">{label}</label>
                        </div>"#,
                    label = kind.label(),
                )
            })
            .collect()
    }

    fn offers_section(&self) -> String {
        if self.point.offers.is_empty() {
            return String::new();
        }
        let id = self.point.id;
        let offers: String = self
            .point
            .offers
            .iter()
            .map(|offer| {
                let checked = if self.point.is_offer_selected(offer.id) { " checked" } else { "" };
                format!(
                    r#"<div class="event__offer-selector">
                        <input class="event__offer-checkbox  visually-hidden" id="event-offer-{offer_id}-{id}" type="checkbox" name="event-offer-{offer_id}"{checked}>
                        <label class="event__offer-label" for="event-offer-{offer_id}-{id}">
                          <span class="event__offer-title">{title}</span>
                          &plus;&euro;&nbsp;
                          <span class="event__offer-price">{price}</span>
                        </label>
                      </div>"#,
                    offer_id = offer.id,
                    title = escape(&offer.title),
                    price = offer.price,
                )
            })
            .collect();

        format!(
            r#"<section class="event__section  event__section--offers">
                    <h3 class="event__section-title  event__section-title--offers">Offers</h3>
                    <div class="event__available-offers">{offers}</div>
                  </section>"#
        )
    }
}

impl View for EditFormView {
    fn template(&self) -> String {
        let point = &self.point;
        let id = point.id;

        format!(
            r##"<li class="trip-events__item" data-session="{session}">
              <form class="event event--edit" action="#" method="post">
                <header class="event__header">
                  <div class="event__type-wrapper">
                    <label class="event__type  event__type-btn" for="event-type-toggle-{id}">
                      <span class="visually-hidden">Choose event type</span>
                      <img class="event__type-icon" width="17" height="17" src="img/icons/{icon}.png" alt="Event type icon">
                    </label>
                    <input class="event__type-toggle  visually-hidden" id="event-type-toggle-{id}" type="checkbox">
                    <div class="event__type-list">
                      <fieldset class="event__type-group">
                        <legend class="visually-hidden">Event type</legend>
                        {types}
                      </fieldset>
                    </div>
                  </div>
                  <div class="event__field-group  event__field-group--destination">
                    <label class="event__label  event__type-output" for="event-destination-{id}">{label}</label>
                    <input class="event__input  event__input--destination" id="event-destination-{id}" type="text" name="event-destination" value="{destination}">
                  </div>
                  <div class="event__field-group  event__field-group--time">
                    <label class="visually-hidden" for="event-start-time-{id}">From</label>
                    <input class="event__input  event__input--time" id="event-start-time-{id}" type="text" name="event-start-time" value="{from}">
                    &mdash;
                    <label class="visually-hidden" for="event-end-time-{id}">To</label>
                    <input class="event__input  event__input--time" id="event-end-time-{id}" type="text" name="event-end-time" value="{to}">
                  </div>
                  <div class="event__field-group  event__field-group--price">
                    <label class="event__label" for="event-price-{id}">
                      <span class="visually-hidden">Price</span>
                      &euro;
                    </label>
                    <input class="event__input  event__input--price" id="event-price-{id}" type="text" name="event-price" value="{price}">
                  </div>
                  <button class="event__save-btn  btn  btn--blue" type="submit">Save</button>
                  <button class="event__reset-btn" type="reset">Delete</button>
                  <button class="event__rollup-btn" type="button">
                    <span class="visually-hidden">Close event</span>
                  </button>
                </header>
                <section class="event__details">
                  {offers}
                  <section class="event__section  event__section--destination">
                    <h3 class="event__section-title  event__section-title--destination">Destination</h3>
                    <p class="event__destination-description">{description}</p>
                  </section>
                </section>
              </form>
            </li>"##,
            session = self.session,
            icon = point.event_type.as_str(),
            types = self.type_items(),
            label = point.event_type.label(),
            destination = escape(&point.destination.name),
            from = point.date_from.format(DATE_INPUT_FORMAT),
            to = point.date_to.format(DATE_INPUT_FORMAT),
            price = point.base_price,
            offers = self.offers_section(),
            description = escape(&point.destination.description),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_point;

    #[test]
    fn test_form_reflects_point() {
        let point = mock_point(3);
        let markup = EditFormView::new(SessionId::new(3), &point).template();
        assert!(markup.contains(r#"data-session="3""#));
        assert!(markup.contains("event--edit"));
        assert!(markup.contains(&format!(r#"value="{}""#, point.destination.name)));
        assert!(markup.contains(&format!(r#"value="{}" checked"#, point.event_type.as_str())));
        assert!(markup.contains(&point.date_from.format(DATE_INPUT_FORMAT).to_string()));
    }

    #[test]
    fn test_offers_section_only_with_offers() {
        let mut point = mock_point(3);
        assert!(!point.offers.is_empty());
        let with = EditFormView::new(SessionId::new(0), &point).template();
        assert!(with.contains("event__section--offers"));

        point.offers.clear();
        let without = EditFormView::new(SessionId::new(0), &point).template();
        assert!(!without.contains("event__section--offers"));
    }
}
