//! Formatted node tree
//!
//! This module defines the node types for representing rich editable
//! content. The tree is the common intermediate format between the live
//! editable surface and the markup dialect.

/// A node of rich editable content.
///
/// Trees are built fresh on every conversion call and discarded
/// afterwards; a node has no identity beyond the call that created it.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedNode {
    /// Root container holding an ordered sequence of block nodes
    Document(Vec<FormattedNode>),

    /// Plain text run
    Text(String),

    /// Bold run
    Bold(Vec<FormattedNode>),

    /// Italic run
    Italic(Vec<FormattedNode>),

    /// Inline code run
    Code(Vec<FormattedNode>),

    /// Struck-through run
    Strikethrough(Vec<FormattedNode>),

    /// Link with an optional target
    Link {
        href: Option<String>,
        children: Vec<FormattedNode>,
    },

    /// Fenced code region; the content is carried verbatim and never
    /// re-parsed for inline formatting
    Preformatted(String),

    /// Quoted block; grouped lines are separated by `LineBreak` nodes
    Blockquote(Vec<FormattedNode>),

    /// Item of a numbered list. Its number is derived from sibling
    /// position at flattening time, never stored.
    OrderedListItem(Vec<FormattedNode>),

    /// Item of a bulleted list
    UnorderedListItem(Vec<FormattedNode>),

    /// Hard line break
    LineBreak,

    /// Paragraph line
    Paragraph(Vec<FormattedNode>),

    /// Emoji shortcode without the surrounding colons
    EmojiPlaceholder(String),
}

impl FormattedNode {
    /// Create a text node
    pub fn text(value: &str) -> Self {
        FormattedNode::Text(value.to_string())
    }

    /// Wrap a single line of text in a paragraph
    pub fn paragraph_of(value: &str) -> Self {
        FormattedNode::Paragraph(vec![FormattedNode::text(value)])
    }
}
