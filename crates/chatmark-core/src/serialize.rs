//! Tree flattening
//!
//! Walks a formatted node tree and emits the markup string. The
//! per-variant behavior is a closed match over `FormattedNode`, so a new
//! node kind cannot be forgotten silently.

use crate::ast::FormattedNode;
use crate::dialect::{BULLET_PREFIX, FENCE, QUOTE_PREFIX};

/// Flatten a tree into its markup string.
///
/// Never fails; an empty tree yields the empty string. The output never
/// begins or ends with a run of bare line breaks.
pub fn extract(root: &FormattedNode) -> String {
    let mut out = String::with_capacity(256);
    flatten_sequence(std::slice::from_ref(root), &mut out);
    out.trim_matches('\n').to_string()
}

/// Flatten a sibling run. Ordered-item numbers are derived from position
/// in the run; any other sibling kind resets the counter, so reordering
/// can never produce a stale number.
fn flatten_sequence(nodes: &[FormattedNode], out: &mut String) {
    let mut ordinal: u32 = 0;
    for node in nodes {
        ordinal = match node {
            FormattedNode::OrderedListItem(_) => ordinal + 1,
            _ => 0,
        };
        flatten_node(node, ordinal, out);
    }
}

fn flatten_node(node: &FormattedNode, ordinal: u32, out: &mut String) {
    match node {
        FormattedNode::Document(children) => flatten_sequence(children, out),

        FormattedNode::Text(value) => out.push_str(value),

        FormattedNode::Bold(children) => wrap(children, '*', out),

        FormattedNode::Italic(children) => wrap(children, '_', out),

        // An inline code run inside a preformatted block never reaches
        // here: surface reads collapse the whole block into raw text.
        FormattedNode::Code(children) => wrap(children, '`', out),

        FormattedNode::Strikethrough(children) => wrap(children, '~', out),

        FormattedNode::Link { href, children } => {
            flatten_link(href.as_deref(), children, out);
        }

        FormattedNode::Preformatted(raw) => {
            out.push_str(FENCE);
            out.push('\n');
            out.push_str(raw);
            out.push('\n');
            out.push_str(FENCE);
        }

        FormattedNode::Blockquote(children) => {
            let inner = flatten_children(children);
            let quoted: Vec<String> = inner
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(|line| format!("{QUOTE_PREFIX}{line}"))
                .collect();
            out.push_str(&quoted.join("\n"));
            out.push('\n');
        }

        FormattedNode::OrderedListItem(children) => {
            // Numbered from the enclosing run; a detached item is "1."
            out.push_str(&ordinal.max(1).to_string());
            out.push_str(". ");
            out.push_str(&flatten_children(children));
            out.push('\n');
        }

        FormattedNode::UnorderedListItem(children) => {
            out.push_str(BULLET_PREFIX);
            out.push_str(&flatten_children(children));
            out.push('\n');
        }

        FormattedNode::LineBreak => out.push('\n'),

        FormattedNode::Paragraph(children) => {
            let inner = flatten_children(children);
            out.push_str(&inner);
            // Blank paragraph lines are suppressed rather than emitted
            // as empty lines.
            if !inner.trim().is_empty() {
                out.push('\n');
            }
        }

        FormattedNode::EmojiPlaceholder(shortcode) => {
            if !shortcode.is_empty() {
                out.push(':');
                out.push_str(shortcode);
                out.push(':');
            }
        }
    }
}

fn flatten_children(children: &[FormattedNode]) -> String {
    let mut inner = String::new();
    flatten_sequence(children, &mut inner);
    inner
}

fn wrap(children: &[FormattedNode], delimiter: char, out: &mut String) {
    out.push(delimiter);
    out.push_str(&flatten_children(children));
    out.push(delimiter);
}

fn flatten_link(href: Option<&str>, children: &[FormattedNode], out: &mut String) {
    let text = flatten_children(children);
    match href {
        Some(href) if !href.is_empty() && !text.is_empty() && href != text => {
            out.push('<');
            out.push_str(href);
            out.push('|');
            out.push_str(&text);
            out.push('>');
        }
        _ => {
            if !text.is_empty() {
                out.push_str(&text);
            } else if let Some(href) = href {
                out.push_str(href);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        assert_eq!(extract(&FormattedNode::Document(Vec::new())), "");
    }

    #[test]
    fn test_whitespace_only_tree() {
        let tree = FormattedNode::Document(vec![FormattedNode::Paragraph(vec![
            FormattedNode::text("   "),
        ])]);
        assert_eq!(extract(&tree), "   ");
    }

    #[test]
    fn test_surrounding_line_breaks_are_trimmed() {
        let tree = FormattedNode::Document(vec![
            FormattedNode::LineBreak,
            FormattedNode::LineBreak,
            FormattedNode::text("hello"),
            FormattedNode::LineBreak,
            FormattedNode::LineBreak,
        ]);
        assert_eq!(extract(&tree), "hello");
    }

    #[test]
    fn test_bold() {
        let tree = FormattedNode::Bold(vec![FormattedNode::text("ok")]);
        assert_eq!(extract(&tree), "*ok*");
    }

    #[test]
    fn test_italic_code_strikethrough() {
        let tree = FormattedNode::Paragraph(vec![
            FormattedNode::Italic(vec![FormattedNode::text("i")]),
            FormattedNode::text(" "),
            FormattedNode::Code(vec![FormattedNode::text("c")]),
            FormattedNode::text(" "),
            FormattedNode::Strikethrough(vec![FormattedNode::text("s")]),
        ]);
        assert_eq!(extract(&tree), "_i_ `c` ~s~");
    }

    #[test]
    fn test_link_with_distinct_text() {
        let tree = FormattedNode::Link {
            href: Some("https://example.com".to_string()),
            children: vec![FormattedNode::text("docs")],
        };
        assert_eq!(extract(&tree), "<https://example.com|docs>");
    }

    #[test]
    fn test_link_text_equal_to_href_collapses() {
        let tree = FormattedNode::Link {
            href: Some("https://x".to_string()),
            children: vec![FormattedNode::text("https://x")],
        };
        assert_eq!(extract(&tree), "https://x");
    }

    #[test]
    fn test_link_without_text_emits_href() {
        let tree = FormattedNode::Link {
            href: Some("https://x".to_string()),
            children: Vec::new(),
        };
        assert_eq!(extract(&tree), "https://x");
    }

    #[test]
    fn test_link_without_href_emits_text() {
        let tree = FormattedNode::Link {
            href: None,
            children: vec![FormattedNode::text("bare")],
        };
        assert_eq!(extract(&tree), "bare");
    }

    #[test]
    fn test_preformatted_is_fenced_verbatim() {
        let tree = FormattedNode::Preformatted("raw *text*".to_string());
        assert_eq!(extract(&tree), "```\nraw *text*\n```");
    }

    #[test]
    fn test_blockquote_prefixes_non_blank_lines() {
        let tree = FormattedNode::Blockquote(vec![
            FormattedNode::text("a"),
            FormattedNode::LineBreak,
            FormattedNode::LineBreak,
            FormattedNode::text("b"),
        ]);
        assert_eq!(extract(&tree), "> a\n> b");
    }

    #[test]
    fn test_ordered_items_number_from_position() {
        let tree = FormattedNode::Document(vec![
            FormattedNode::OrderedListItem(vec![FormattedNode::text("first")]),
            FormattedNode::OrderedListItem(vec![FormattedNode::text("second")]),
            FormattedNode::paragraph_of("after"),
        ]);
        assert_eq!(extract(&tree), "1. first\n2. second\nafter");
    }

    #[test]
    fn test_ordered_numbering_resets_after_interruption() {
        let tree = FormattedNode::Document(vec![
            FormattedNode::OrderedListItem(vec![FormattedNode::text("one")]),
            FormattedNode::OrderedListItem(vec![FormattedNode::text("two")]),
            FormattedNode::paragraph_of("pause"),
            FormattedNode::OrderedListItem(vec![FormattedNode::text("again")]),
        ]);
        assert_eq!(extract(&tree), "1. one\n2. two\npause\n1. again");
    }

    #[test]
    fn test_unordered_item() {
        let tree = FormattedNode::UnorderedListItem(vec![FormattedNode::text("thing")]);
        assert_eq!(extract(&tree), "• thing");
    }

    #[test]
    fn test_blank_paragraph_adds_no_line() {
        let tree = FormattedNode::Document(vec![
            FormattedNode::paragraph_of("a"),
            FormattedNode::Paragraph(Vec::new()),
            FormattedNode::paragraph_of("b"),
        ]);
        assert_eq!(extract(&tree), "a\nb");
    }

    #[test]
    fn test_emoji_placeholder() {
        let tree = FormattedNode::Paragraph(vec![
            FormattedNode::text("thanks "),
            FormattedNode::EmojiPlaceholder("pray".to_string()),
        ]);
        assert_eq!(extract(&tree), "thanks :pray:");
    }

    #[test]
    fn test_empty_emoji_contributes_nothing() {
        let tree = FormattedNode::Paragraph(vec![
            FormattedNode::text("a"),
            FormattedNode::EmojiPlaceholder(String::new()),
            FormattedNode::text("b"),
        ]);
        assert_eq!(extract(&tree), "ab");
    }
}
