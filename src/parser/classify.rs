//! Line classification for layout sources.
//!
//! Every raw input line falls into exactly one [`LineClass`]. Classification
//! is stateless; what a class means for the document depends on the
//! [`ParserContext`](super::ParserContext) it is applied to.

use super::style::trim_ascii;

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: &str = "//";

/// The kind of an input line once comments are stripped and whitespace trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// The line held only a comment. Produces nothing, not even spacing.
    Comment,

    /// An empty line. Becomes a spacing line inside an open page.
    Blank,

    /// `[/tag]`: closes the open page.
    CloseDirective,

    /// `[tag] params`: opens a page if needed and resets the style.
    ///
    /// `params` is the trimmed text after the closing bracket, possibly empty.
    OpenDirective {
        /// Comma separated style parameters
        params: &'a str,
    },

    /// A directive without its closing bracket.
    Malformed,

    /// Regular text, trimmed.
    Text(&'a str),
}

/// Classify one raw input line.
pub fn classify(raw: &str) -> LineClass<'_> {
    let (content, had_comment) = match raw.find(COMMENT_MARKER) {
        Some(pos) => (&raw[..pos], true),
        None => (raw, false),
    };

    let line = trim_ascii(content);
    if line.is_empty() {
        return if had_comment {
            LineClass::Comment
        } else {
            LineClass::Blank
        };
    }

    match line.strip_prefix('[') {
        Some(rest) if rest.starts_with('/') => LineClass::CloseDirective,
        Some(rest) => match rest.find(']') {
            Some(close) => LineClass::OpenDirective {
                params: trim_ascii(&rest[close + 1..]),
            },
            None => LineClass::Malformed,
        },
        None => LineClass::Text(line),
    }
}
