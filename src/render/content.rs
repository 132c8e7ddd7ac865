//! Page content stream generation.

use crate::model::TextEncoding;

use super::layout::PositionedLine;

/// Resource name of the shared font in every page's resource dictionary.
pub const FONT_RESOURCE: &str = "F1";

/// Escape the characters that are special inside a PDF literal string.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build the drawing instructions for one page.
///
/// Each line becomes a font selection, a fill color, an absolute text matrix
/// and a show-text operator, all inside a single text object. Operators are
/// ASCII; line text is written in the encoding of its source.
pub fn build_content(lines: &[PositionedLine<'_>], encoding: TextEncoding) -> Vec<u8> {
    let mut out = String::from("BT\n");

    for placed in lines {
        let style = &placed.line.style;
        out.push_str(&format!(
            "/{} {} Tf\n{} {} {} rg\n1 0 0 1 {} {} Tm\n({}) Tj\n",
            FONT_RESOURCE,
            style.font_size,
            style.color.r,
            style.color.g,
            style.color.b,
            placed.x,
            placed.y,
            escape_text(&placed.line.text),
        ));
    }

    out.push_str("ET\n");
    encoding.encode(&out).into_owned()
}
