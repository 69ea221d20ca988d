//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::board::with_board;
use crate::store::{store_clear_page, store_set_page, TripStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: TripStore,
}

impl AppContext {
    pub fn new(store: TripStore) -> Self {
        Self { store }
    }

    /// Push the board's current counters into the store
    pub fn sync(&self) {
        if let Some((page, editing)) = with_board(|b| Ok((b.page(), b.editing_count()))) {
            store_set_page(&self.store, page, editing);
        }
    }

    /// Tear the list down (Stats screen)
    pub fn hide_list(&self) {
        with_board(|b| b.destroy());
        store_clear_page(&self.store);
    }

    /// Render the list from scratch (Table screen)
    pub fn show_list(&self) {
        with_board(|b| {
            b.destroy()?;
            b.init()
        });
        self.sync();
    }
}
