//! Layout description parsing.
//!
//! A layout source is processed one line at a time. Each line is first
//! classified ([`classify`]) and then applied to an explicit
//! [`ParserContext`], which tracks the current style and the open page.

mod classify;
mod context;
mod layout_parser;
mod style;

pub use classify::{classify, LineClass, COMMENT_MARKER};
pub use context::ParserContext;
pub use layout_parser::LayoutParser;
pub use style::parse_style;
