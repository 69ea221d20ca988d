//! Trip Points Frontend App
//!
//! Page header (route, menu, filters, new event) above the events list.

use leptos::prelude::*;
use reactive_stores::Store;

use waypoint_list::source::DEFAULT_POINT_COUNT;
use waypoint_list::PointsModel;

use crate::components::{Filters, MenuNav, NewEventButton, RouteInfo, TripEvents};
use crate::context::AppContext;
use crate::store::{MenuItem, TripState, TripStateStoreFields};

/// Twice the model default, so "New event" has points left to reveal
const DEMO_POINT_COUNT: usize = DEFAULT_POINT_COUNT * 2;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TripState::default());
    let ctx = AppContext::new(store);

    provide_context(store);
    provide_context(ctx);

    let screen = Signal::derive(move || store.screen().get());
    let on_select = move |item: MenuItem| {
        log::info!("[APP] menu -> {:?}", item);
        *store.screen().write() = item;
        match item {
            MenuItem::Stats => ctx.hide_list(),
            MenuItem::Table => ctx.show_list(),
        }
    };

    view! {
        <header class="page-header">
            <div class="page-body__container  page-header__container">
                <div class="trip-main">
                    <RouteInfo />
                    <div class="trip-main__trip-controls  trip-controls">
                        <div class="trip-controls__navigation">
                            <h2 class="visually-hidden">"Switch trip view"</h2>
                            <MenuNav screen=screen on_select=on_select />
                        </div>
                        <div class="trip-controls__filters">
                            <h2 class="visually-hidden">"Filter events"</h2>
                            <Filters />
                        </div>
                    </div>
                    <NewEventButton />
                </div>
            </div>
        </header>
        <main class="page-body__page-main  page-main">
            <div class="page-body__container">
                <TripEvents model=PointsModel::with_mock(DEMO_POINT_COUNT) />
                <p class="trip-events__counter">
                    {move || format!(
                        "{} of {} points, {} open",
                        store.rendered().get(),
                        store.total().get(),
                        store.editing().get(),
                    )}
                </p>
            </div>
        </main>
    }
}
