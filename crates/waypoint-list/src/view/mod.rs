//! Views
//!
//! A view only describes markup. Turning that markup into a node happens
//! later, on first access through [`Component::element`], and the node is
//! cached until [`Component::remove_element`] drops it.

mod edit_form;
mod list;
mod point;

pub use edit_form::EditFormView;
pub use list::{NoPointsView, SortingView, TripEventsListView};
pub use point::WaypointView;

use crate::error::Result;
use crate::surface::Surface;

/// Something that can describe itself as markup
pub trait View {
    /// Markup for this view. Must be pure.
    fn template(&self) -> String;
}

/// A view paired with its lazily realized node
#[derive(Debug)]
pub struct Component<V, N> {
    view: V,
    element: Option<N>,
}

impl<V: View, N: Clone> Component<V, N> {
    pub fn new(view: V) -> Self {
        Self { view, element: None }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn template(&self) -> String {
        self.view.template()
    }

    /// The realized node, built from the template on first access
    pub fn element<S>(&mut self, surface: &mut S) -> Result<N>
    where
        S: Surface<Node = N>,
    {
        if let Some(element) = &self.element {
            return Ok(element.clone());
        }
        let element = surface.create_element(&self.view.template())?;
        self.element = Some(element.clone());
        Ok(element)
    }

    /// The realized node, if any
    pub fn cached(&self) -> Option<&N> {
        self.element.as_ref()
    }

    pub fn is_realized(&self) -> bool {
        self.element.is_some()
    }

    /// Drop the cached node. The next `element` call builds a fresh one.
    pub fn remove_element(&mut self) -> Option<N> {
        self.element.take()
    }
}

/// Escape text for use inside markup and attribute values
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    struct Static(&'static str);

    impl View for Static {
        fn template(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_element_is_cached() {
        let mut surface = MemorySurface::new();
        let mut component = Component::new(Static("<p>hi</p>"));
        assert!(!component.is_realized());

        let first = component.element(&mut surface).unwrap();
        let second = component.element(&mut surface).unwrap();
        assert_eq!(first, second);
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_remove_element_invalidates_cache() {
        let mut surface = MemorySurface::new();
        let mut component = Component::new(Static("<p>hi</p>"));
        let first = component.element(&mut surface).unwrap();
        assert_eq!(component.remove_element(), Some(first));
        let second = component.element(&mut surface).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_template_does_not_realize() {
        let component: Component<_, crate::surface::NodeId> = Component::new(Static("<p>hi</p>"));
        assert_eq!(component.template(), "<p>hi</p>");
        assert!(component.cached().is_none());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
