//! List Presenter
//!
//! Owns the events container and renders the point list into it page by
//! page. The container's children are written by two parties only: the
//! presenter appends past the rendered count, and each [`EditSession`]
//! replaces its own node in place. Their regions never overlap.

use log::{debug, info, warn};

use crate::config::{EditPolicy, ListConfig};
use crate::error::{ConfigError, RenderError, Result};
use crate::event::{is_escape, KeyInput, UiEvent};
use crate::listeners::ListenerRegistry;
use crate::model::{PointId, Waypoint};
use crate::session::{EditSession, SessionId, SessionState};
use crate::source::PointSource;
use crate::surface::{render, RenderPosition, Surface};
use crate::view::{Component, NoPointsView, SortingView, TripEventsListView};

/// Snapshot of the paging cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Points mounted so far
    pub rendered_count: usize,
    /// Points revealed per load-more activation
    pub page_size: usize,
    /// Points in the snapshot
    pub total: usize,
}

impl PageState {
    pub fn has_more(&self) -> bool {
        self.rendered_count < self.total
    }
}

/// Renders points into a container and routes UI events to their sessions
pub struct ListPresenter<S: Surface> {
    surface: S,
    container: S::Node,
    config: ListConfig,

    sorting: Component<SortingView, S::Node>,
    list: Component<TripEventsListView, S::Node>,
    no_points: Component<NoPointsView, S::Node>,

    points: Vec<Waypoint>,
    /// Advances by a full step on every activation, even past the end
    cursor: usize,
    list_mounted: bool,
    initialized: bool,

    sessions: Vec<EditSession<S::Node>>,
    listeners: ListenerRegistry,
}

impl<S: Surface> ListPresenter<S> {
    /// Fails if `config` does not pass [`ListConfig::validate`]
    pub fn new(surface: S, container: S::Node, config: ListConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            surface,
            container,
            config,
            sorting: Component::new(SortingView),
            list: Component::new(TripEventsListView),
            no_points: Component::new(NoPointsView),
            points: Vec::new(),
            cursor: 0,
            list_mounted: false,
            initialized: false,
            sessions: Vec::new(),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Take a snapshot of `source` and render the first page.
    ///
    /// An empty snapshot mounts the empty-state message instead of the list.
    pub fn init(&mut self, source: &dyn PointSource) -> Result<()> {
        if self.initialized {
            warn!("[LIST] init called twice, tearing down the previous list");
            self.destroy()?;
        }

        self.points = source.points();
        self.cursor = self.config.initial_count;
        self.initialized = true;
        info!("[LIST] loaded {} points", self.points.len());

        if self.points.is_empty() {
            render(&mut self.no_points, &self.container, RenderPosition::BeforeEnd, &mut self.surface)?;
            return Ok(());
        }

        self.mount_list()?;
        let first_page = self.points.len().min(self.config.initial_count);
        for index in 0..first_page {
            self.render_point(index)?;
        }
        debug!("[LIST] rendered first page of {}", first_page);
        Ok(())
    }

    /// Reveal the next `step` points. Returns how many were mounted.
    ///
    /// Once the snapshot is exhausted this keeps advancing the cursor and
    /// mounts nothing.
    pub fn render_next_page(&mut self) -> Result<usize> {
        if !self.initialized {
            warn!("[LIST] load more before init ignored");
            return Ok(0);
        }
        if !self.list_mounted {
            self.mount_list()?;
        }

        let total = self.points.len();
        let start = self.cursor.min(total);
        let end = self.cursor.saturating_add(self.config.step).min(total);
        for index in start..end {
            self.render_point(index)?;
        }
        self.cursor = self.cursor.saturating_add(self.config.step);

        let mounted = end - start;
        debug!("[LIST] load more mounted {} (cursor {})", mounted, self.cursor);
        Ok(mounted)
    }

    /// Rollup activated on a displayed point
    pub fn rollup(&mut self, id: SessionId) -> Result<bool> {
        if id.index() >= self.sessions.len() {
            return Err(RenderError::UnknownSession(id));
        }
        let list = self.list_node()?;

        if self.config.edit_policy == EditPolicy::Exclusive {
            for other in self.sessions.iter_mut().filter(|s| s.id() != id) {
                other.close_editing(&mut self.surface, &list, &mut self.listeners)?;
            }
        }

        let session = &mut self.sessions[id.index()];
        session.open(&mut self.surface, &list, &mut self.listeners)
    }

    /// Global key listener. Returns how many forms the key closed.
    pub fn key_down<K>(&mut self, key: &mut K) -> Result<usize>
    where
        K: KeyInput + ?Sized,
    {
        if self.listeners.is_empty() || !is_escape(key.key()) {
            return Ok(0);
        }

        let list = self.list_node()?;
        let mut closed = 0;
        for id in self.listeners.cancel_targets() {
            let Some(session) = self.sessions.get_mut(id.index()) else {
                warn!("[LIST] listener for unknown session {}", id);
                self.listeners.detach(id);
                continue;
            };
            if session.cancel(&mut *key, &mut self.surface, &list, &mut self.listeners)? {
                closed += 1;
            }
        }
        Ok(closed)
    }

    /// Submit fired on a session's edit form
    pub fn submit<E>(&mut self, id: SessionId, event: &mut E) -> Result<bool>
    where
        E: UiEvent + ?Sized,
    {
        if id.index() >= self.sessions.len() {
            return Err(RenderError::UnknownSession(id));
        }
        if !self.listeners.has_submit_listener(id) {
            debug!("[LIST] submit for session {} without a form open", id);
            return Ok(false);
        }

        let list = self.list_node()?;
        let session = &mut self.sessions[id.index()];
        session.submit(event, &mut self.surface, &list, &mut self.listeners)
    }

    /// Tear everything down so `init` can start over
    pub fn destroy(&mut self) -> Result<()> {
        for session in &mut self.sessions {
            session.dispose(&mut self.surface, &mut self.listeners)?;
        }
        for node in [
            self.sorting.remove_element(),
            self.list.remove_element(),
            self.no_points.remove_element(),
        ]
        .into_iter()
        .flatten()
        {
            self.surface.remove(&node)?;
        }

        self.sessions.clear();
        self.listeners.clear();
        self.points.clear();
        self.cursor = 0;
        self.list_mounted = false;
        self.initialized = false;
        info!("[LIST] destroyed");
        Ok(())
    }

    pub fn page(&self) -> PageState {
        let total = self.points.len();
        PageState {
            rendered_count: self.cursor.min(total),
            page_size: self.config.step,
            total,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn sessions(&self) -> &[EditSession<S::Node>] {
        &self.sessions
    }

    pub fn session_state(&self, id: SessionId) -> Option<SessionState> {
        self.sessions.get(id.index()).map(|s| s.state())
    }

    /// Session rendering the point with `point_id`
    pub fn session_for_point(&self, point_id: PointId) -> Option<SessionId> {
        self.sessions.iter().find(|s| s.point_id() == point_id).map(|s| s.id())
    }

    pub fn editing_sessions(&self) -> Vec<SessionId> {
        self.listeners.cancel_targets()
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn container(&self) -> &S::Node {
        &self.container
    }

    /// The mounted list container, if the list has been shown
    pub fn list(&self) -> Option<&S::Node> {
        self.list.cached().filter(|_| self.list_mounted)
    }

    fn list_node(&self) -> Result<S::Node> {
        self.list()
            .cloned()
            .ok_or_else(|| RenderError::UnknownNode("trip-events__list".to_string()))
    }

    fn mount_list(&mut self) -> Result<()> {
        render(&mut self.sorting, &self.container, RenderPosition::BeforeEnd, &mut self.surface)?;
        render(&mut self.list, &self.container, RenderPosition::BeforeEnd, &mut self.surface)?;
        self.list_mounted = true;
        Ok(())
    }

    fn render_point(&mut self, index: usize) -> Result<()> {
        let list = self.list_node()?;
        let id = SessionId::new(self.sessions.len());
        let mut session = EditSession::new(id, &self.points[index]);
        session.mount(&mut self.surface, &list)?;
        self.sessions.push(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{SyntheticEvent, SyntheticKey};
    use crate::source::PointsModel;
    use crate::surface::{MemorySurface, NodeId};
    use pretty_assertions::assert_eq;

    fn presenter(config: ListConfig) -> ListPresenter<MemorySurface> {
        let mut surface = MemorySurface::new();
        let container = surface.create_container("section");
        ListPresenter::new(surface, container, config).unwrap()
    }

    fn list_children(presenter: &ListPresenter<MemorySurface>) -> Vec<NodeId> {
        let list = *presenter.list().unwrap();
        presenter.surface().children(list).unwrap().to_vec()
    }

    #[test]
    fn test_init_renders_first_page() {
        let mut p = presenter(ListConfig::default());
        p.init(&PointsModel::with_mock(9)).unwrap();

        assert_eq!(list_children(&p).len(), 6);
        assert_eq!(p.page().rendered_count, 6);
        assert_eq!(p.page().total, 9);
        assert!(p.page().has_more());
        // sorting header + list
        assert_eq!(p.surface().children(*p.container()).unwrap().len(), 2);
    }

    #[test]
    fn test_short_list_renders_everything() {
        let mut p = presenter(ListConfig::default());
        p.init(&PointsModel::with_mock(4)).unwrap();
        assert_eq!(list_children(&p).len(), 4);
        assert_eq!(p.page().rendered_count, 4);
        assert_eq!(p.render_next_page().unwrap(), 0);
        assert_eq!(list_children(&p).len(), 4);
    }

    #[test]
    fn test_load_more_before_init_is_ignored() {
        let mut p = presenter(ListConfig::default());
        assert_eq!(p.render_next_page().unwrap(), 0);
        assert!(p.list().is_none());
    }

    #[test]
    fn test_rollup_unknown_session() {
        let mut p = presenter(ListConfig::default());
        p.init(&PointsModel::with_mock(2)).unwrap();
        let err = p.rollup(SessionId::new(5)).unwrap_err();
        assert_eq!(err, RenderError::UnknownSession(SessionId::new(5)));
    }

    #[test]
    fn test_submit_without_open_form() {
        let mut p = presenter(ListConfig::default());
        p.init(&PointsModel::with_mock(2)).unwrap();
        let mut event = SyntheticEvent::new();
        assert!(!p.submit(SessionId::new(1), &mut event).unwrap());
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_escape_closes_all_independent_forms() {
        let mut p = presenter(ListConfig::default());
        p.init(&PointsModel::with_mock(6)).unwrap();
        p.rollup(SessionId::new(1)).unwrap();
        p.rollup(SessionId::new(4)).unwrap();
        assert_eq!(p.editing_sessions(), vec![SessionId::new(1), SessionId::new(4)]);

        let mut key = SyntheticKey::escape();
        assert_eq!(p.key_down(&mut key).unwrap(), 2);
        assert!(key.default_prevented());
        assert!(p.editing_sessions().is_empty());
    }

    #[test]
    fn test_exclusive_policy_closes_other_forms() {
        let mut p = presenter(ListConfig {
            edit_policy: EditPolicy::Exclusive,
            ..ListConfig::default()
        });
        p.init(&PointsModel::with_mock(6)).unwrap();
        p.rollup(SessionId::new(0)).unwrap();
        p.rollup(SessionId::new(3)).unwrap();

        assert_eq!(p.session_state(SessionId::new(0)), Some(SessionState::Displaying));
        assert_eq!(p.session_state(SessionId::new(3)), Some(SessionState::Editing));
        assert_eq!(p.editing_sessions(), vec![SessionId::new(3)]);
    }

    #[test]
    fn test_destroy_then_init() {
        let mut p = presenter(ListConfig::default());
        let model = PointsModel::with_mock(7);
        p.init(&model).unwrap();
        p.rollup(SessionId::new(2)).unwrap();

        p.destroy().unwrap();
        assert!(p.surface().children(*p.container()).unwrap().is_empty());
        assert!(p.listeners().is_empty());
        assert!(!p.is_initialized());

        p.init(&model).unwrap();
        assert_eq!(list_children(&p).len(), 6);
        assert!(p.editing_sessions().is_empty());
    }

    #[test]
    fn test_session_for_point() {
        let mut p = presenter(ListConfig::default());
        let model = PointsModel::with_mock(3);
        p.init(&model).unwrap();
        let third = model.points()[2].id;
        assert_eq!(p.session_for_point(third), Some(SessionId::new(2)));
        assert_eq!(p.session_for_point(999), None);
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut surface = MemorySurface::new();
        let container = surface.create_container("section");
        let config = ListConfig {
            step: 0,
            ..ListConfig::default()
        };
        let err = ListPresenter::new(surface, container, config).err().unwrap();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
