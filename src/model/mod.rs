//! Document model types for parsed page layouts.
//!
//! This module defines the intermediate representation that bridges
//! layout parsing and PDF assembly. A [`Document`] is an ordered list of
//! [`Page`]s, each holding the styled [`Line`]s recorded for it.

mod document;
mod encoding;
mod line;
mod page;
mod style;

pub use document::Document;
pub use encoding::TextEncoding;
pub use line::{Line, LINE_GAP};
pub use page::Page;
pub use style::{Alignment, Color, StyleState, DEFAULT_FONT_SIZE};
