//! Rendering module for turning parsed layouts into output documents.
//!
//! The PDF path runs in three steps: lines are positioned on the fixed
//! canvas ([`position_page`]), turned into content streams
//! ([`build_content`]) and written through an [`ObjectWriter`] that records
//! every object's byte offset for the cross-reference table.

mod content;
pub mod geometry;
mod json;
mod layout;
mod options;
mod pdf;
mod writer;

pub use content::{build_content, escape_text, FONT_RESOURCE};
pub use json::{to_json, JsonFormat};
pub use layout::{layout_bottom, layout_top, line_x, position_page, PositionedLine};
pub use options::PdfOptions;
pub use pdf::{assemble, to_pdf, ObjectLayout, BASE_FONT, PDF_HEADER};
pub use writer::{ObjectWriter, PdfObject, WrittenPdf};
