//! Trip Events Component
//!
//! The section the list presenter renders into. Leptos owns only the
//! heading; everything after it is mounted by the presenter.

use leptos::html::Section;
use leptos::prelude::*;
use web_sys::Element;

use waypoint_list::{PointSource, PointsModel};

use crate::board::{bind_events, has_board, install_board, TripBoard};
use crate::context::AppContext;
use crate::dom::{load_config, DomSurface};
use crate::route::summarize;
use crate::store::TripStateStoreFields;

#[component]
pub fn TripEvents(model: PointsModel) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let section_ref = NodeRef::<Section>::new();
    let model = StoredValue::new(model);

    Effect::new(move |_| {
        let Some(section) = section_ref.get() else { return };
        if has_board() {
            return;
        }
        let Some(surface) = DomSurface::current() else { return };
        let model = model.get_value();

        let container = Element::from(section);
        let config = web_sys::window()
            .and_then(|w| w.document())
            .map(|doc| load_config(&doc))
            .unwrap_or_default();
        log::info!("[APP] list config {:?}", config);

        *ctx.store.route().write() = summarize(&model.points());
        let board = match TripBoard::new(surface, container.clone(), config, model) {
            Ok(board) => board,
            Err(err) => {
                log::error!("[APP] {}", err);
                return;
            }
        };
        if !install_board(board) {
            return;
        }
        bind_events(&container, move || ctx.sync());
        ctx.show_list();
    });

    view! {
        <section class="trip-events" node_ref=section_ref>
            <h2 class="visually-hidden">"Trip events"</h2>
        </section>
    }
}
