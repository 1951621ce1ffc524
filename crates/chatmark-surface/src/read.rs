//! Surface reading
//!
//! Walks an editable element's node tree and lifts it into the formatted
//! node model. Rendered code blocks are captured whole and carried
//! verbatim; emoji images are resolved to their shortcode; unknown
//! elements pass their children through unchanged.

use chatmark_core::FormattedNode;

use crate::node::{Node, NodeType};

/// Class names the host uses to mark a rendered code block.
const CODE_BLOCK_CLASSES: &[&str] = &[
    "c-mrkdwn__pre",
    "c-code_block",
    "ql-code-block-container",
    "ql-code-block",
];

/// Read an editable element into a document tree.
pub fn read_tree(root: &Node) -> FormattedNode {
    FormattedNode::Document(read_children(root))
}

fn read_children(parent: &Node) -> Vec<FormattedNode> {
    let tag = parent.tag_name();
    let parent_tag = parent.is_element().then_some(tag.as_str());

    let mut nodes = Vec::new();
    for child in &parent.children {
        read_node(child, parent_tag, &mut nodes);
    }
    nodes
}

fn read_node(node: &Node, parent_tag: Option<&str>, out: &mut Vec<FormattedNode>) {
    match node.node_type {
        NodeType::Text => {
            if let Some(value) = &node.node_value {
                if !value.is_empty() {
                    out.push(FormattedNode::Text(value.clone()));
                }
            }
        }
        NodeType::Fragment => out.extend(read_children(node)),
        NodeType::Element => read_element(node, parent_tag, out),
    }
}

fn read_element(node: &Node, parent_tag: Option<&str>, out: &mut Vec<FormattedNode>) {
    if is_code_block(node) {
        out.push(FormattedNode::Preformatted(node.text_content()));
        return;
    }

    match node.tag_name().as_str() {
        "b" | "strong" => out.push(FormattedNode::Bold(read_children(node))),

        "i" | "em" => out.push(FormattedNode::Italic(read_children(node))),

        "code" => {
            // Inside a rendered code block the backticks belong to the
            // fence, not to an inline run.
            if parent_tag == Some("pre") {
                out.extend(read_children(node));
            } else {
                out.push(FormattedNode::Code(read_children(node)));
            }
        }

        "s" | "del" | "strike" => out.push(FormattedNode::Strikethrough(read_children(node))),

        "br" => out.push(FormattedNode::LineBreak),

        "blockquote" => out.push(FormattedNode::Blockquote(read_children(node))),

        "img" => {
            if let Some(shortcode) = emoji_shortcode(node) {
                out.push(FormattedNode::EmojiPlaceholder(shortcode));
            }
        }

        "a" => out.push(FormattedNode::Link {
            href: node.attr("href").map(str::to_string),
            children: read_children(node),
        }),

        "ul" | "ol" => out.extend(read_children(node)),

        "li" => {
            let item = read_children(node);
            if parent_tag == Some("ol") {
                out.push(FormattedNode::OrderedListItem(item));
            } else {
                out.push(FormattedNode::UnorderedListItem(item));
            }
        }

        "p" | "div" => out.push(FormattedNode::Paragraph(read_children(node))),

        _ => out.extend(read_children(node)),
    }
}

fn is_code_block(node: &Node) -> bool {
    if node.tag_name() == "pre" {
        return true;
    }
    if node.attr("data-stringify-type") == Some("pre") {
        return true;
    }
    CODE_BLOCK_CLASSES.iter().any(|class| node.has_class(class))
}

/// Resolve an emoji image to its bare shortcode. The host writes the code
/// in one of several attributes depending on product generation; the
/// first that resolves wins.
fn emoji_shortcode(node: &Node) -> Option<String> {
    if let Some(text) = node.attr("data-stringify-text") {
        if let Some(code) = strip_colons(text) {
            return Some(code.to_string());
        }
    }
    if let Some(id) = node.attr("data-id") {
        if let Some(code) = strip_colons(id) {
            return Some(code.to_string());
        }
    }
    if let Some(legacy) = node.attr("data-stringify-emoji") {
        let code = strip_colons(legacy).unwrap_or(legacy);
        if !code.is_empty() {
            return Some(code.to_string());
        }
    }
    node.attr("data-emoji")
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn strip_colons(value: &str) -> Option<&str> {
    value
        .strip_prefix(':')
        .and_then(|rest| rest.strip_suffix(':'))
        .filter(|code| !code.is_empty())
}
