//! Load-More Trigger

use log::debug;

use crate::error::Result;
use crate::event::UiEvent;
use crate::presenter::ListPresenter;
use crate::surface::Surface;

/// The control that reveals the next page of points.
///
/// Stateless: enabling or disabling the control is up to whoever renders it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadMoreTrigger;

impl LoadMoreTrigger {
    pub fn new() -> Self {
        Self
    }

    /// Activation handler. Returns how many points were mounted.
    pub fn activate<S, E>(&self, presenter: &mut ListPresenter<S>, event: &mut E) -> Result<usize>
    where
        S: Surface,
        E: UiEvent + ?Sized,
    {
        event.prevent_default();
        let mounted = presenter.render_next_page()?;
        debug!("[TRIGGER] activation mounted {} points", mounted);
        Ok(mounted)
    }
}
