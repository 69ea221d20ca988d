//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use waypoint_list::PageState;

use crate::route::RouteSummary;

/// Which top-level screen the menu shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    Table,
    Stats,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TripState {
    /// Active menu screen
    pub screen: MenuItem,
    /// Points mounted in the list
    pub rendered: usize,
    /// Points in the model
    pub total: usize,
    /// Forms currently open
    pub editing: usize,
    /// Header route summary
    pub route: RouteSummary,
}

/// Type alias for the store
pub type TripStore = Store<TripState>;

/// Get the trip store from context
pub fn use_trip_store() -> TripStore {
    expect_context::<TripStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the presenter's paging cursor into the store
pub fn store_set_page(store: &TripStore, page: PageState, editing: usize) {
    *store.rendered().write() = page.rendered_count;
    *store.total().write() = page.total;
    *store.editing().write() = editing;
}

/// Reset counters after the list is torn down
pub fn store_clear_page(store: &TripStore) {
    *store.rendered().write() = 0;
    *store.editing().write() = 0;
}
