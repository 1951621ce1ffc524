//! # chatmark-surface
//!
//! Editable-surface side of the chat markup converter.
//!
//! The converter never touches the host widget directly. It reads and
//! writes through the [`EditableSurface`] contract; the surface content
//! itself is modeled as a DOM-style [`Node`] tree that any host bridge (a
//! webview, CDP, tests) can map its live document onto.
//!
//! ## Design
//!
//! - **Reader**: lifts a node tree into the typed `FormattedNode` model.
//! - **Builder**: turns a parsed tree back into a node fragment.
//! - **Surface**: the adapter contract plus an in-memory implementation.
//!
//! ## Example
//!
//! ```rust
//! use chatmark_surface::{extract_from, inject, Node, NodeSurface};
//!
//! let mut surface = NodeSurface::new(Node::element("div"));
//!
//! assert!(inject("hello *world*", &mut surface));
//! assert_eq!(extract_from(&surface), "hello *world*");
//! ```

mod build;
mod node;
mod read;
mod service;
mod surface;

pub use build::build_fragment;
pub use node::{Node, NodeType};
pub use read::read_tree;
pub use service::{extract_from, inject};
pub use surface::{EditableSurface, NodeSurface, SurfaceEvent};

/// Error type for surface operations
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("editable surface is detached")]
    Detached,

    #[error("editable surface is read-only")]
    ReadOnly,
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
