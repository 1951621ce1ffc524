//! Converter entry points over an editable surface.

use chatmark_core::{extract, parse};

use crate::surface::EditableSurface;

/// Read the surface out into its markup string.
///
/// Never fails; a detached surface reads as an empty document and yields
/// the empty string.
pub fn extract_from<S: EditableSurface>(surface: &S) -> String {
    extract(&surface.current_tree())
}

/// Parse markup and write it into the surface, then signal the change.
///
/// Returns false only when the surface cannot be written. Malformed
/// markup degrades to literal text instead of failing, and an empty
/// string still performs the full replace, clearing the surface.
pub fn inject<S: EditableSurface>(markup: &str, surface: &mut S) -> bool {
    let tree = parse(markup);
    if !surface.replace(&tree) {
        return false;
    }
    surface.notify_changed();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::surface::{NodeSurface, SurfaceEvent};

    #[test]
    fn test_inject_then_extract_round_trips() {
        let mut surface = NodeSurface::new(Node::element("div"));
        let markup = "hello *world*\n> quoted\n• still a bullet";

        assert!(inject(markup, &mut surface));
        assert_eq!(extract_from(&surface), markup);
    }

    #[test]
    fn test_inject_signals_change() {
        let mut surface = NodeSurface::new(Node::element("div"));
        assert!(inject("hi", &mut surface));
        assert_eq!(
            surface.events().to_vec(),
            vec![
                SurfaceEvent::Input,
                SurfaceEvent::BeforeInput,
                SurfaceEvent::Change,
            ]
        );
    }

    #[test]
    fn test_inject_into_detached_surface_fails_quietly() {
        let mut surface = NodeSurface::detached();
        assert!(!inject("hello", &mut surface));
        assert!(surface.events().is_empty());
    }

    #[test]
    fn test_inject_empty_markup_clears_and_signals() {
        let mut editable = Node::element("div");
        editable.add_child(Node::text("old"));
        let mut surface = NodeSurface::new(editable);

        assert!(inject("", &mut surface));
        assert_eq!(surface.root().unwrap().children.len(), 0);
        assert_eq!(surface.events().len(), 3);
        assert_eq!(extract_from(&surface), "");
    }

    #[test]
    fn test_extract_from_detached_surface_is_empty() {
        let surface = NodeSurface::detached();
        assert_eq!(extract_from(&surface), "");
    }

    #[test]
    fn test_malformed_markup_survives_as_literal_text() {
        let mut surface = NodeSurface::new(Node::element("div"));
        assert!(inject("item * missing", &mut surface));
        assert_eq!(extract_from(&surface), "item * missing");
    }
}
