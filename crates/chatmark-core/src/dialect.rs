//! Markup dialect constants.

/// Fence marker delimiting a preformatted region
pub const FENCE: &str = "```";

/// Prefix of a quoted line
pub const QUOTE_PREFIX: &str = "> ";

/// Prefix of an unordered list item
pub const BULLET_PREFIX: &str = "• ";
