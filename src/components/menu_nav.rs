//! Menu Navigation Component
//!
//! Switches between the points table and the stats screen.

use leptos::prelude::*;

use crate::store::MenuItem;

const MENU_ITEMS: &[(MenuItem, &str)] = &[(MenuItem::Table, "Table"), (MenuItem::Stats, "Stats")];

#[component]
pub fn MenuNav(
    screen: Signal<MenuItem>,
    on_select: impl Fn(MenuItem) + Copy + 'static,
) -> impl IntoView {
    view! {
        <nav class="trip-controls__trip-tabs  trip-tabs">
            {MENU_ITEMS.iter().map(|(item, label)| {
                let item = *item;
                let class = move || {
                    if screen.get() == item { "trip-tabs__btn  trip-tabs__btn--active" } else { "trip-tabs__btn" }
                };
                view! {
                    <a
                        class=class
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            if screen.get_untracked() != item {
                                on_select(item);
                            }
                        }
                    >
                        {*label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
