//! Markup parsing
//!
//! Turns a markup string into a formatted node tree. Fenced regions are
//! lifted out first and carried verbatim; the remaining prose is grouped
//! into blockquotes and paragraphs line by line, and each line is
//! tokenized by the inline scanner. Parsing never fails: markup that
//! cannot be matched degrades to literal text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::FormattedNode;
use crate::dialect::QUOTE_PREFIX;
use crate::scan::next_token;

// One optional newline after the opening fence and one before the closing
// fence belong to the fence, not the content.
static FENCED_REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```\n?(.*?)\n?```").expect("fence pattern is valid"));

/// Parse a markup string into a document tree.
pub fn parse(markup: &str) -> FormattedNode {
    let mut blocks = Vec::new();
    let mut prose_from = 0;

    for caps in FENCED_REGION.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > prose_from {
            parse_prose(&markup[prose_from..whole.start()], &mut blocks);
        }
        let raw = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        blocks.push(FormattedNode::Preformatted(raw.to_string()));
        prose_from = whole.end();
    }

    if prose_from < markup.len() {
        parse_prose(&markup[prose_from..], &mut blocks);
    }

    FormattedNode::Document(blocks)
}

fn parse_prose(prose: &str, blocks: &mut Vec<FormattedNode>) {
    let lines: Vec<&str> = prose.split('\n').collect();
    let mut i = 0;

    while i < lines.len() {
        if quote_content(lines[i]).is_none() {
            let mut children = Vec::new();
            parse_inline(lines[i], &mut children);
            blocks.push(FormattedNode::Paragraph(children));
            i += 1;
            continue;
        }

        // Consecutive quoted lines collapse into one blockquote, with a
        // line break between each pair of grouped lines.
        let mut children = Vec::new();
        let mut first = true;
        while i < lines.len() {
            let Some(content) = quote_content(lines[i]) else {
                break;
            };
            if !first {
                children.push(FormattedNode::LineBreak);
            }
            first = false;
            parse_inline(content, &mut children);
            i += 1;
        }
        blocks.push(FormattedNode::Blockquote(children));
    }
}

/// Quoted-line content, or `None` for a non-quote line. A bare `>` line
/// is part of the quote run but contributes no content of its own.
fn quote_content(line: &str) -> Option<&str> {
    if let Some(content) = line.strip_prefix(QUOTE_PREFIX) {
        Some(content)
    } else if line == ">" {
        Some("")
    } else {
        None
    }
}

fn parse_inline(line: &str, out: &mut Vec<FormattedNode>) {
    let mut rest = line;
    while !rest.is_empty() {
        match next_token(rest) {
            Some(token) => {
                if token.start > 0 {
                    out.push(FormattedNode::text(&rest[..token.start]));
                }
                out.push(token.node);
                rest = &rest[token.end..];
            }
            None => {
                out.push(FormattedNode::text(rest));
                break;
            }
        }
    }
}
