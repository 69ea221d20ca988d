//! Trip Board
//!
//! Glue between the page and the list presenter: owns the presenter and the
//! point model, and turns raw DOM events into presenter calls.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use waypoint_list::{
    ConfigError, ListConfig, ListPresenter, LoadMoreTrigger, PageState, PointsModel, RenderError, SessionId,
};

use crate::dom::{DomEvent, DomKey, DomSurface};

const ROLLUP_SELECTOR: &str = ".event__rollup-btn";
const SESSION_SELECTOR: &str = "[data-session]";
const EDIT_FORM_SELECTOR: &str = ".event--edit";

/// The presenter plus what it renders
pub struct TripBoard {
    presenter: ListPresenter<DomSurface>,
    model: PointsModel,
    trigger: LoadMoreTrigger,
}

thread_local! {
    // The board holds DOM nodes, so it lives on the main thread only.
    static BOARD: RefCell<Option<TripBoard>> = const { RefCell::new(None) };
}

impl TripBoard {
    pub fn new(
        surface: DomSurface,
        container: Element,
        config: ListConfig,
        model: PointsModel,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            presenter: ListPresenter::new(surface, container, config)?,
            model,
            trigger: LoadMoreTrigger::new(),
        })
    }

    pub fn init(&mut self) -> Result<(), RenderError> {
        self.presenter.init(&self.model)
    }

    pub fn destroy(&mut self) -> Result<(), RenderError> {
        self.presenter.destroy()
    }

    pub fn page(&self) -> PageState {
        self.presenter.page()
    }

    pub fn editing_count(&self) -> usize {
        self.presenter.editing_sessions().len()
    }

    /// "New event" activation
    pub fn load_more(&mut self, event: &web_sys::Event) -> Result<usize, RenderError> {
        self.trigger.activate(&mut self.presenter, &mut DomEvent::new(event))
    }

    /// Delegated click on the events container
    pub fn handle_click(&mut self, event: &web_sys::Event) -> Result<bool, RenderError> {
        let Some(target) = event_target(event) else {
            return Ok(false);
        };
        let Ok(Some(button)) = target.closest(ROLLUP_SELECTOR) else {
            return Ok(false);
        };
        // The edit form carries a rollup button too; only the display row opens a form.
        if matches!(button.closest(EDIT_FORM_SELECTOR), Ok(Some(_))) {
            return Ok(false);
        }
        match session_of(&button) {
            Some(id) => self.presenter.rollup(id),
            None => Ok(false),
        }
    }

    /// Delegated submit on the events container
    pub fn handle_submit(&mut self, event: &web_sys::Event) -> Result<bool, RenderError> {
        let Some(id) = event_target(event).and_then(|t| session_of(&t)) else {
            return Ok(false);
        };
        self.presenter.submit(id, &mut DomEvent::new(event))
    }

    /// Global keydown
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> Result<usize, RenderError> {
        self.presenter.key_down(&mut DomKey::new(event))
    }
}

fn event_target(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn session_of(element: &Element) -> Option<SessionId> {
    let item = element.closest(SESSION_SELECTOR).ok()??;
    let index = item.get_attribute("data-session")?.parse::<usize>().ok()?;
    Some(SessionId::new(index))
}

/// Make `board` the page's board, replacing any previous one.
///
/// Returns false if the slot is borrowed by a running handler.
pub fn install_board(board: TripBoard) -> bool {
    BOARD.with(|slot| match slot.try_borrow_mut() {
        Ok(mut slot) => {
            *slot = Some(board);
            true
        }
        Err(_) => {
            log::warn!("[BOARD] install while a handler runs ignored");
            false
        }
    })
}

/// Whether a board is installed. A slot borrowed by a running handler
/// cannot be inspected and reports false.
pub fn has_board() -> bool {
    BOARD.with(|slot| match slot.try_borrow() {
        Ok(board) => board.is_some(),
        Err(_) => {
            log::warn!("[BOARD] board is busy");
            false
        }
    })
}

/// Run `f` against the board, logging presenter errors.
///
/// Returns None when no board is installed or it is already borrowed by an
/// outer handler.
pub fn with_board<T>(f: impl FnOnce(&mut TripBoard) -> Result<T, RenderError>) -> Option<T> {
    BOARD.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            log::warn!("[BOARD] re-entrant event ignored");
            return None;
        };
        match f(slot.as_mut()?) {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("[BOARD] {}", err);
                None
            }
        }
    })
}

/// Attach the delegated click/submit listeners to `container` and the single
/// global keydown listener to the document. `on_change` runs after each event.
pub fn bind_events<F>(container: &Element, on_change: F)
where
    F: Fn() + Clone + 'static,
{
    let changed = on_change.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if with_board(|b| b.handle_click(&ev)) == Some(true) {
            changed();
        }
    });
    let _ = container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let changed = on_change.clone();
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if with_board(|b| b.handle_submit(&ev)) == Some(true) {
            changed();
        }
    });
    let _ = container.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();

    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if with_board(|b| b.handle_key(&ev)).unwrap_or(0) > 0 {
            on_change();
        }
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_has_no_board() {
        assert!(!has_board());
        assert_eq!(with_board(|b| Ok(b.editing_count())), None);
    }

    #[test]
    fn test_busy_slot_reports_no_board() {
        BOARD.with(|slot| {
            let _held = slot.borrow_mut();
            assert!(!has_board());
            assert_eq!(with_board(|b| Ok(b.editing_count())), None);
        });
    }
}
