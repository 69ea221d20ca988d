//! Edit Sessions
//!
//! Each rendered point owns one [`EditSession`]: a two-state machine that
//! swaps the point's display node for its edit node in place and keeps the
//! [`ListenerRegistry`] in step with that state.
//!
//! ```text
//! Displaying --open-------------> Editing
//! Editing    --cancel (Escape)--> Displaying
//! Editing    --submit-----------> Displaying
//! ```
//!
//! Both exits go through `close`, so the cancel-key listener is dropped
//! exactly once per edit.

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::event::{is_escape, KeyInput, UiEvent};
use crate::listeners::ListenerRegistry;
use crate::model::{Entity, PointId, Waypoint};
use crate::surface::{render, RenderPosition, Surface};
use crate::view::{Component, EditFormView, WaypointView};

/// Identifies a session by the order its point was rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(usize);

impl SessionId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Displaying,
    Editing,
}

/// Display and edit components built from the same point.
///
/// Construction only describes the markup; no node exists until the session
/// mounts it.
#[derive(Debug)]
pub struct PointPresentation<N> {
    display: Component<WaypointView, N>,
    edit: Component<EditFormView, N>,
}

impl<N: Clone> PointPresentation<N> {
    pub fn new(session: SessionId, point: &Waypoint) -> Self {
        Self {
            display: Component::new(WaypointView::new(session, point)),
            edit: Component::new(EditFormView::new(session, point)),
        }
    }

    pub fn display(&self) -> &Component<WaypointView, N> {
        &self.display
    }

    pub fn edit(&self) -> &Component<EditFormView, N> {
        &self.edit
    }
}

/// Display/edit state machine for one point
#[derive(Debug)]
pub struct EditSession<N> {
    id: SessionId,
    point_id: PointId,
    state: SessionState,
    presentation: PointPresentation<N>,
}

impl<N> EditSession<N>
where
    N: Clone + PartialEq + fmt::Debug,
{
    pub fn new(id: SessionId, point: &Waypoint) -> Self {
        Self {
            id,
            point_id: point.id(),
            state: SessionState::Displaying,
            presentation: PointPresentation::new(id, point),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn point_id(&self) -> PointId {
        self.point_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == SessionState::Editing
    }

    pub fn presentation(&self) -> &PointPresentation<N> {
        &self.presentation
    }

    /// Node that should currently sit in the list for this point
    pub fn mounted_node(&self) -> Option<&N> {
        match self.state {
            SessionState::Displaying => self.presentation.display.cached(),
            SessionState::Editing => self.presentation.edit.cached(),
        }
    }

    /// Append the display node to `list`
    pub fn mount<S>(&mut self, surface: &mut S, list: &N) -> Result<()>
    where
        S: Surface<Node = N>,
    {
        render(&mut self.presentation.display, list, RenderPosition::BeforeEnd, surface)?;
        Ok(())
    }

    /// Rollup activated: swap in the edit node and start listening for cancel/submit.
    ///
    /// Returns false when the session is already editing.
    pub fn open<S>(&mut self, surface: &mut S, list: &N, registry: &mut ListenerRegistry) -> Result<bool>
    where
        S: Surface<Node = N>,
    {
        if self.is_editing() {
            return Ok(false);
        }

        let display = self.presentation.display.element(surface)?;
        let edit = self.presentation.edit.element(surface)?;
        surface.replace(list, &edit, &display)?;
        registry.attach(self.id);
        self.state = SessionState::Editing;
        debug!("[SESSION] {} (point {}) -> editing", self.id, self.point_id);
        Ok(true)
    }

    /// Handle a key press. Only the exact cancel key closes an editing session.
    pub fn cancel<S, K>(
        &mut self,
        key: &mut K,
        surface: &mut S,
        list: &N,
        registry: &mut ListenerRegistry,
    ) -> Result<bool>
    where
        S: Surface<Node = N>,
        K: KeyInput + ?Sized,
    {
        if !self.is_editing() || !is_escape(key.key()) {
            return Ok(false);
        }
        key.prevent_default();
        self.close(surface, list, registry)
    }

    /// Handle the edit form's submit
    pub fn submit<S, E>(
        &mut self,
        event: &mut E,
        surface: &mut S,
        list: &N,
        registry: &mut ListenerRegistry,
    ) -> Result<bool>
    where
        S: Surface<Node = N>,
        E: UiEvent + ?Sized,
    {
        if !self.is_editing() {
            return Ok(false);
        }
        event.prevent_default();
        self.close(surface, list, registry)
    }

    /// Close the edit form from code, e.g. when another session takes over
    pub fn close_editing<S>(&mut self, surface: &mut S, list: &N, registry: &mut ListenerRegistry) -> Result<bool>
    where
        S: Surface<Node = N>,
    {
        if !self.is_editing() {
            return Ok(false);
        }
        self.close(surface, list, registry)
    }

    fn close<S>(&mut self, surface: &mut S, list: &N, registry: &mut ListenerRegistry) -> Result<bool>
    where
        S: Surface<Node = N>,
    {
        let display = self.presentation.display.element(surface)?;
        let edit = self.presentation.edit.element(surface)?;
        surface.replace(list, &display, &edit)?;
        registry.detach(self.id);
        self.state = SessionState::Displaying;
        debug!("[SESSION] {} (point {}) -> displaying", self.id, self.point_id);
        Ok(true)
    }

    /// Unmount whichever node is showing and drop both cached nodes
    pub fn dispose<S>(&mut self, surface: &mut S, registry: &mut ListenerRegistry) -> Result<()>
    where
        S: Surface<Node = N>,
    {
        if let Some(node) = self.mounted_node().cloned() {
            surface.remove(&node)?;
        }
        registry.detach(self.id);
        self.presentation.display.remove_element();
        self.presentation.edit.remove_element();
        self.state = SessionState::Displaying;
        Ok(())
    }
}
