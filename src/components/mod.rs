//! UI Components
//!
//! Header widgets and the events section.

mod filters;
mod menu_nav;
mod new_event_button;
mod route_info;
mod trip_events;

pub use filters::Filters;
pub use menu_nav::MenuNav;
pub use new_event_button::NewEventButton;
pub use route_info::RouteInfo;
pub use trip_events::TripEvents;
