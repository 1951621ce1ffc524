//! Editable-surface adapter.
//!
//! The converter touches the live document only through this contract:
//! read the current tree, atomically replace it, and fire the host's own
//! change detection afterwards. Discovery of which editable element is
//! current stays with the host; the adapter is handed the element.

use chatmark_core::FormattedNode;

use crate::build::build_fragment;
use crate::node::Node;
use crate::read::read_tree;
use crate::{Result, SurfaceError};

/// Handle for reading and writing a live editable document.
pub trait EditableSurface {
    /// Read the surface into the tree model.
    fn current_tree(&self) -> FormattedNode;

    /// Atomically clear and repopulate the surface from a tree. Returns
    /// false when the surface cannot be located or written.
    fn replace(&mut self, root: &FormattedNode) -> bool;

    /// Fire the surface's change-detection signal after a programmatic
    /// write so the host application observes the update.
    fn notify_changed(&mut self);
}

/// Change signals a programmatic write fires on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Input,
    BeforeInput,
    Change,
}

/// In-memory editable surface backed by an owned node tree.
#[derive(Debug, Default)]
pub struct NodeSurface {
    root: Option<Node>,
    read_only: bool,
    events: Vec<SurfaceEvent>,
}

impl NodeSurface {
    /// Create a surface around an editable element.
    pub fn new(root: Node) -> Self {
        Self {
            root: Some(root),
            read_only: false,
            events: Vec::new(),
        }
    }

    /// Create a surface whose editable element has gone away.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Create a surface that can be read but not written.
    pub fn read_only(root: Node) -> Self {
        Self {
            root: Some(root),
            read_only: true,
            events: Vec::new(),
        }
    }

    /// The editable element, if still attached.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Change signals fired so far, oldest first.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Drain the recorded change signals.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fallible replace backing the boolean adapter contract.
    pub fn try_replace(&mut self, root: &FormattedNode) -> Result<()> {
        if self.read_only {
            return Err(SurfaceError::ReadOnly);
        }
        let target = self.root.as_mut().ok_or(SurfaceError::Detached)?;
        let fragment = build_fragment(root);
        target.children.clear();
        target.children.extend(fragment.children);
        Ok(())
    }
}

impl EditableSurface for NodeSurface {
    fn current_tree(&self) -> FormattedNode {
        match &self.root {
            Some(root) => read_tree(root),
            None => FormattedNode::Document(Vec::new()),
        }
    }

    fn replace(&mut self, root: &FormattedNode) -> bool {
        self.try_replace(root).is_ok()
    }

    fn notify_changed(&mut self) {
        // The reference surface fires these in exactly this order.
        self.events.extend([
            SurfaceEvent::Input,
            SurfaceEvent::BeforeInput,
            SurfaceEvent::Change,
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_core::parse;

    #[test]
    fn test_replace_populates_the_element() {
        let mut surface = NodeSurface::new(Node::element("div"));
        assert!(surface.replace(&parse("hello")));

        let root = surface.root().unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag_name(), "p");
    }

    #[test]
    fn test_replace_clears_previous_content() {
        let mut editable = Node::element("div");
        editable.add_child(Node::text("old"));
        let mut surface = NodeSurface::new(editable);

        assert!(surface.replace(&parse("new")));
        let root = surface.root().unwrap();
        assert_eq!(root.text_content(), "new");
    }

    #[test]
    fn test_detached_surface_refuses_replace() {
        let mut surface = NodeSurface::detached();
        assert!(!surface.replace(&parse("hello")));
        assert!(matches!(
            surface.try_replace(&parse("hello")),
            Err(SurfaceError::Detached)
        ));
    }

    #[test]
    fn test_read_only_surface_refuses_replace() {
        let mut surface = NodeSurface::read_only(Node::element("div"));
        assert!(matches!(
            surface.try_replace(&parse("hello")),
            Err(SurfaceError::ReadOnly)
        ));
    }

    #[test]
    fn test_detached_surface_reads_empty() {
        let surface = NodeSurface::detached();
        assert_eq!(surface.current_tree(), FormattedNode::Document(Vec::new()));
    }

    #[test]
    fn test_notify_changed_records_signal_order() {
        let mut surface = NodeSurface::new(Node::element("div"));
        surface.notify_changed();
        assert_eq!(
            surface.take_events(),
            vec![
                SurfaceEvent::Input,
                SurfaceEvent::BeforeInput,
                SurfaceEvent::Change,
            ]
        );
        assert!(surface.events().is_empty());
    }
}
