//! Fragment building
//!
//! Turns a formatted node tree back into surface nodes for injection.
//! Consecutive list items are regrouped under a single list container so
//! the host renders them as one list.

use chatmark_core::FormattedNode;

use crate::node::Node;

/// Build a surface fragment from a tree.
pub fn build_fragment(root: &FormattedNode) -> Node {
    let mut fragment = Node::fragment();
    build_sequence(std::slice::from_ref(root), &mut fragment);
    fragment
}

fn build_sequence(nodes: &[FormattedNode], parent: &mut Node) {
    let mut i = 0;
    while i < nodes.len() {
        match &nodes[i] {
            FormattedNode::OrderedListItem(_) => {
                let mut list = Node::element("ol");
                while let Some(FormattedNode::OrderedListItem(children)) = nodes.get(i) {
                    list.add_child(item_element(children));
                    i += 1;
                }
                parent.add_child(list);
            }
            FormattedNode::UnorderedListItem(_) => {
                let mut list = Node::element("ul");
                while let Some(FormattedNode::UnorderedListItem(children)) = nodes.get(i) {
                    list.add_child(item_element(children));
                    i += 1;
                }
                parent.add_child(list);
            }
            node => {
                build_node(node, parent);
                i += 1;
            }
        }
    }
}

fn item_element(children: &[FormattedNode]) -> Node {
    let mut li = Node::element("li");
    build_sequence(children, &mut li);
    li
}

fn build_node(node: &FormattedNode, parent: &mut Node) {
    match node {
        FormattedNode::Document(children) => build_sequence(children, parent),

        FormattedNode::Text(value) => parent.add_child(Node::text(value)),

        FormattedNode::Bold(children) => parent.add_child(wrap_element("b", children)),

        FormattedNode::Italic(children) => parent.add_child(wrap_element("i", children)),

        FormattedNode::Code(children) => parent.add_child(wrap_element("code", children)),

        FormattedNode::Strikethrough(children) => parent.add_child(wrap_element("s", children)),

        FormattedNode::Link { href, children } => {
            let mut a = match href {
                Some(href) => Node::element_with_attrs("a", &[("href", href.as_str())]),
                None => Node::element("a"),
            };
            build_sequence(children, &mut a);
            parent.add_child(a);
        }

        FormattedNode::Preformatted(raw) => {
            let mut pre = Node::element("pre");
            pre.add_child(Node::text(raw));
            parent.add_child(pre);
        }

        FormattedNode::Blockquote(children) => {
            parent.add_child(wrap_element("blockquote", children));
        }

        FormattedNode::LineBreak => parent.add_child(Node::element("br")),

        FormattedNode::Paragraph(children) => parent.add_child(wrap_element("p", children)),

        FormattedNode::EmojiPlaceholder(shortcode) => {
            parent.add_child(Node::element_with_attrs(
                "img",
                &[("data-emoji", shortcode.as_str())],
            ));
        }

        // Items are regrouped by the sequence walk above; a lone item
        // still gets its own single-entry list container.
        FormattedNode::OrderedListItem(children) => {
            let mut list = Node::element("ol");
            list.add_child(item_element(children));
            parent.add_child(list);
        }
        FormattedNode::UnorderedListItem(children) => {
            let mut list = Node::element("ul");
            list.add_child(item_element(children));
            parent.add_child(list);
        }
    }
}

fn wrap_element(tag: &str, children: &[FormattedNode]) -> Node {
    let mut element = Node::element(tag);
    build_sequence(children, &mut element);
    element
}
