//! Filters Component
//!
//! Date filter radios. Selecting one only marks it checked.

use leptos::prelude::*;

const FILTERS: &[(&str, &str)] = &[
    ("everything", "Everything"),
    ("future", "Future"),
    ("present", "Present"),
    ("past", "Past"),
];

#[component]
pub fn Filters() -> impl IntoView {
    let (current, set_current) = signal("everything");

    view! {
        <form class="trip-filters" action="#" method="get">
            {FILTERS.iter().map(|(value, label)| {
                let value = *value;
                let id = format!("filter-{}", value);
                view! {
                    <div class="trip-filters__filter">
                        <input
                            id=id.clone()
                            class="trip-filters__filter-input  visually-hidden"
                            type="radio"
                            name="trip-filter"
                            value=value
                            prop:checked=move || current.get() == value
                            on:change=move |_| set_current.set(value)
                        />
                        <label class="trip-filters__filter-label" for=id>{*label}</label>
                    </div>
                }
            }).collect_view()}
            <button class="visually-hidden" type="submit">"Accept filter"</button>
        </form>
    }
}
