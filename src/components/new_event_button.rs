//! New Event Button Component
//!
//! The load-more trigger: each click reveals the next page of points.

use leptos::prelude::*;

use crate::board::with_board;
use crate::context::AppContext;
use crate::store::{MenuItem, TripStateStoreFields};

#[component]
pub fn NewEventButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    // Only the table screen has a list to grow
    let disabled = move || store.screen().get() != MenuItem::Table;

    view! {
        <button
            class="trip-main__event-add-btn  btn  btn--big  btn--yellow"
            type="button"
            prop:disabled=disabled
            on:click=move |ev: web_sys::MouseEvent| {
                let mounted = with_board(|b| b.load_more(ev.as_ref()));
                log::debug!("[APP] new event mounted {:?}", mounted);
                ctx.sync();
            }
        >
            "New event"
        </button>
    }
}
