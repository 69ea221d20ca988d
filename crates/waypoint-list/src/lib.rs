//! Waypoint List
//!
//! Headless core of the trip waypoint list:
//! - surface: mount primitive over an abstract node tree
//! - view: presentational templates with lazy, cached realization
//! - session: per-point display/edit state machine
//! - presenter: paged list rendering and event dispatch
//! - trigger: the "load more" control

pub mod config;
pub mod error;
pub mod event;
pub mod listeners;
pub mod mock;
pub mod model;
pub mod presenter;
pub mod session;
pub mod source;
pub mod surface;
pub mod trigger;
pub mod view;

pub use config::{EditPolicy, ListConfig};
pub use error::{ConfigError, RenderError, Result};
pub use event::{is_escape, KeyInput, SyntheticEvent, SyntheticKey, UiEvent, ESCAPE_KEY};
pub use listeners::ListenerRegistry;
pub use model::{Destination, Entity, EventType, Offer, PointId, Waypoint};
pub use presenter::{ListPresenter, PageState};
pub use session::{EditSession, PointPresentation, SessionId, SessionState};
pub use source::{PointSource, PointsModel};
pub use surface::{render, MemorySurface, NodeId, RenderPosition, Surface};
pub use trigger::LoadMoreTrigger;
pub use view::{Component, View};
