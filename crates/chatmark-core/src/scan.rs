//! Inline delimiter scanner
//!
//! Finds the earliest recognizable inline token in a single line of text.
//! The five token classes (link, code, bold, italic, strikethrough) are
//! folded into one alternation so each line is tokenized in a single pass;
//! the regex engine's leftmost-first semantics pick the match with the
//! smallest start offset, and the alternation order fixes precedence among
//! classes at the same offset.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::FormattedNode;

/// One inline token located in a line of text.
pub(crate) struct InlineMatch {
    /// Byte offset where the token starts
    pub start: usize,
    /// Byte offset just past the token
    pub end: usize,
    /// The typed node the token produces
    pub node: FormattedNode,
}

static INLINE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"<(?P<href>[^|>]+)\|(?P<label>[^>]+)>",
        r"|`(?P<code>[^`]+)`",
        r"|\*(?P<bold>[^*]+)\*",
        r"|_(?P<italic>[^_]+)_",
        r"|~(?P<strike>[^~]+)~",
    ))
    .expect("inline token pattern is valid")
});

/// Locate the earliest inline token in `line`, or `None` when the rest of
/// the line is literal text.
///
/// Every pattern requires both an opening and a closing mark on the same
/// line, so an unmatched delimiter never produces a token. The payload is
/// carried as a single literal text child and is not rescanned.
pub(crate) fn next_token(line: &str) -> Option<InlineMatch> {
    let caps = INLINE_TOKEN.captures(line)?;
    let whole = caps.get(0)?;

    let node = if let (Some(href), Some(label)) = (caps.name("href"), caps.name("label")) {
        FormattedNode::Link {
            href: Some(href.as_str().to_string()),
            children: vec![FormattedNode::text(label.as_str())],
        }
    } else if let Some(code) = caps.name("code") {
        FormattedNode::Code(vec![FormattedNode::text(code.as_str())])
    } else if let Some(bold) = caps.name("bold") {
        FormattedNode::Bold(vec![FormattedNode::text(bold.as_str())])
    } else if let Some(italic) = caps.name("italic") {
        FormattedNode::Italic(vec![FormattedNode::text(italic.as_str())])
    } else if let Some(strike) = caps.name("strike") {
        FormattedNode::Strikethrough(vec![FormattedNode::text(strike.as_str())])
    } else {
        return None;
    };

    Some(InlineMatch {
        start: whole.start(),
        end: whole.end(),
        node,
    })
}
