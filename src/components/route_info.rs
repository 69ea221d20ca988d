//! Route Info Component
//!
//! Trip title, dates and total cost in the header.

use leptos::prelude::*;

use crate::store::{use_trip_store, TripStateStoreFields};

#[component]
pub fn RouteInfo() -> impl IntoView {
    let store = use_trip_store();
    let route = move || store.route().get();

    view! {
        <section class="trip-main__trip-info  trip-info">
            <div class="trip-info__main">
                <h1 class="trip-info__title">{move || route().title}</h1>
                <p class="trip-info__dates">{move || route().dates}</p>
            </div>
            <p class="trip-info__cost">
                "Total: €\u{a0}"
                <span class="trip-info__cost-value">{move || route().cost}</span>
            </p>
        </section>
    }
}
