//! Render Surface
//!
//! The mount primitive. A [`Surface`] turns markup into nodes and moves those
//! nodes around a tree. The browser front end implements it over the DOM,
//! [`MemorySurface`] implements it over an arena for native use and tests.

use std::fmt;

use crate::error::{RenderError, Result};
use crate::view::{Component, View};

/// Where a node is placed relative to the target, as in `insertAdjacentElement`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPosition {
    /// Before the target, as a sibling
    BeforeBegin,
    /// First child of the target (prepend)
    AfterBegin,
    /// Last child of the target (append)
    #[default]
    BeforeEnd,
    /// After the target, as a sibling
    AfterEnd,
}

/// A tree of presentational nodes
pub trait Surface {
    /// Handle to one node. Cheap to clone; equal handles point at the same node.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Build a detached node from markup
    fn create_element(&mut self, markup: &str) -> Result<Self::Node>;

    /// Place `node` relative to `target`, detaching it from its old parent first
    fn insert(&mut self, node: &Self::Node, target: &Self::Node, position: RenderPosition) -> Result<()>;

    /// Put `new` into the slot `old` occupies inside `container`
    fn replace(&mut self, container: &Self::Node, new: &Self::Node, old: &Self::Node) -> Result<()>;

    /// Detach `node` from its parent. Detached nodes are left alone.
    fn remove(&mut self, node: &Self::Node) -> Result<()>;
}

/// Realize `component` and mount it at `position` relative to `target`.
///
/// Mounting twice moves the same cached node; nothing is deduplicated.
pub fn render<V, S>(
    component: &mut Component<V, S::Node>,
    target: &S::Node,
    position: RenderPosition,
    surface: &mut S,
) -> Result<S::Node>
where
    V: View,
    S: Surface,
{
    let element = component.element(surface)?;
    surface.insert(&element, target, position)?;
    Ok(element)
}

/// Handle into a [`MemorySurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    markup: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed surface. Nodes are never freed, only detached.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<NodeData>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty element to serve as a mount target, e.g. `section`
    pub fn create_container(&mut self, tag: &str) -> NodeId {
        self.push(format!("<{tag}></{tag}>"))
    }

    pub fn markup(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.markup.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(node)?.children)
    }

    /// Position of `child` among the children of `container`
    pub fn index_of(&self, container: NodeId, child: NodeId) -> Option<usize> {
        self.nodes
            .get(container.0)
            .and_then(|n| n.children.iter().position(|c| *c == child))
    }

    /// Number of nodes ever created
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, markup: String) -> NodeId {
        self.nodes.push(NodeData {
            markup,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    fn get(&self, node: NodeId) -> Result<&NodeData> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| RenderError::UnknownNode(node.to_string()))
    }

    fn get_mut(&mut self, node: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| RenderError::UnknownNode(node.to_string()))
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        if let Some(parent) = self.get(node)?.parent {
            self.get_mut(parent)?.children.retain(|c| *c != node);
            self.get_mut(node)?.parent = None;
        }
        Ok(())
    }

    fn is_ancestor(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

impl Surface for MemorySurface {
    type Node = NodeId;

    fn create_element(&mut self, markup: &str) -> Result<NodeId> {
        let markup = markup.trim();
        if !markup.starts_with('<') {
            return Err(RenderError::EmptyMarkup(markup.to_string()));
        }
        Ok(self.push(markup.to_string()))
    }

    fn insert(&mut self, node: &NodeId, target: &NodeId, position: RenderPosition) -> Result<()> {
        let (node, target) = (*node, *target);
        self.get(node)?;
        self.get(target)?;
        if self.is_ancestor(node, target) {
            return Err(RenderError::Dom(format!("cannot insert {node} into its own subtree")));
        }

        let (parent, index) = match position {
            RenderPosition::AfterBegin => (target, 0),
            RenderPosition::BeforeEnd => (target, usize::MAX),
            RenderPosition::BeforeBegin | RenderPosition::AfterEnd => {
                let parent = self
                    .parent(target)
                    .ok_or_else(|| RenderError::Detached(target.to_string()))?;
                (parent, 0)
            }
        };

        self.detach(node)?;

        // Sibling slots are resolved after detaching, `node` may have shifted them.
        let index = match position {
            RenderPosition::BeforeBegin => self.index_of(parent, target).unwrap_or(0),
            RenderPosition::AfterEnd => self.index_of(parent, target).map_or(0, |i| i + 1),
            _ => index,
        };

        let children = &mut self.get_mut(parent)?.children;
        let index = index.min(children.len());
        children.insert(index, node);
        self.get_mut(node)?.parent = Some(parent);
        Ok(())
    }

    fn replace(&mut self, container: &NodeId, new: &NodeId, old: &NodeId) -> Result<()> {
        let (container, new, old) = (*container, *new, *old);
        self.get(new)?;
        if new == old {
            return Ok(());
        }
        if self.index_of(container, old).is_none() {
            return Err(RenderError::NotAChild {
                container: container.to_string(),
                child: old.to_string(),
            });
        }

        self.detach(new)?;
        let index = self
            .index_of(container, old)
            .ok_or_else(|| RenderError::NotAChild {
                container: container.to_string(),
                child: old.to_string(),
            })?;
        self.get_mut(container)?.children[index] = new;
        self.get_mut(new)?.parent = Some(container);
        self.get_mut(old)?.parent = None;
        Ok(())
    }

    fn remove(&mut self, node: &NodeId) -> Result<()> {
        self.detach(*node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup() -> (MemorySurface, NodeId, NodeId, NodeId) {
        let mut surface = MemorySurface::new();
        let root = surface.create_container("ul");
        let a = surface.create_element("<li>a</li>").unwrap();
        let b = surface.create_element("<li>b</li>").unwrap();
        (surface, root, a, b)
    }

    #[test]
    fn test_append_and_prepend() {
        let (mut surface, root, a, b) = setup();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        surface.insert(&b, &root, RenderPosition::AfterBegin).unwrap();
        assert_eq!(surface.children(root).unwrap(), &[b, a]);
        assert_eq!(surface.parent(a), Some(root));
    }

    #[test]
    fn test_sibling_positions() {
        let (mut surface, root, a, b) = setup();
        let c = surface.create_element("<li>c</li>").unwrap();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        surface.insert(&b, &a, RenderPosition::BeforeBegin).unwrap();
        surface.insert(&c, &b, RenderPosition::AfterEnd).unwrap();
        assert_eq!(surface.children(root).unwrap(), &[b, c, a]);
    }

    #[test]
    fn test_sibling_of_detached_target_fails() {
        let (mut surface, _root, a, b) = setup();
        let err = surface.insert(&b, &a, RenderPosition::AfterEnd).unwrap_err();
        assert_eq!(err, RenderError::Detached(a.to_string()));
    }

    #[test]
    fn test_insert_moves_node() {
        let (mut surface, root, a, b) = setup();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        surface.insert(&b, &root, RenderPosition::BeforeEnd).unwrap();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        assert_eq!(surface.children(root).unwrap(), &[b, a]);
    }

    #[test]
    fn test_replace_keeps_slot() {
        let (mut surface, root, a, b) = setup();
        let c = surface.create_element("<li>c</li>").unwrap();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        surface.insert(&b, &root, RenderPosition::BeforeEnd).unwrap();
        surface.replace(&root, &c, &a).unwrap();
        assert_eq!(surface.children(root).unwrap(), &[c, b]);
        assert_eq!(surface.parent(a), None);
        assert_eq!(surface.parent(c), Some(root));
    }

    #[test]
    fn test_replace_requires_child() {
        let (mut surface, root, a, b) = setup();
        let err = surface.replace(&root, &a, &b).unwrap_err();
        assert!(matches!(err, RenderError::NotAChild { .. }));
    }

    #[test]
    fn test_remove_detached_is_noop() {
        let (mut surface, root, a, _b) = setup();
        surface.remove(&a).unwrap();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        surface.remove(&a).unwrap();
        assert!(surface.children(root).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_text_markup() {
        let mut surface = MemorySurface::new();
        assert!(surface.create_element("   plain text").is_err());
    }

    #[test]
    fn test_rejects_cycles() {
        let (mut surface, root, a, _b) = setup();
        surface.insert(&a, &root, RenderPosition::BeforeEnd).unwrap();
        assert!(surface.insert(&root, &a, RenderPosition::BeforeEnd).is_err());
    }
}
