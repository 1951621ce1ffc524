//! chatmark-core - formatted-node tree and chat markup conversion
//!
//! This crate provides the core data structures and both conversion
//! directions for the compact chat markup dialect. It is used by
//! `chatmark-surface`, which reads and writes live editable documents.
//!
//! # Architecture
//!
//! ```text
//! Editable surface ──read───▶ ┌───────────────┐ ──extract──▶ Markup String
//!                             │ FormattedNode │
//! Markup String ───parse────▶ │     tree      │ ──build────▶ Editable surface
//!                             └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatmark_core::{extract, parse, FormattedNode};
//!
//! let tree = FormattedNode::Document(vec![FormattedNode::Paragraph(vec![
//!     FormattedNode::Bold(vec![FormattedNode::text("bold")]),
//!     FormattedNode::text(" and plain"),
//! ])]);
//!
//! let markup = extract(&tree);
//! assert_eq!(markup, "*bold* and plain");
//! assert_eq!(extract(&parse(&markup)), markup);
//! ```

mod ast;
mod dialect;
mod parse;
mod scan;
mod serialize;

pub use ast::FormattedNode;
pub use dialect::{BULLET_PREFIX, FENCE, QUOTE_PREFIX};
pub use parse::parse;
pub use serialize::extract;
