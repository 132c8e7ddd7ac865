//! Styled text lines.

use super::StyleState;
use serde::{Deserialize, Serialize};

/// Extra leading added to the font size between consecutive lines.
pub const LINE_GAP: u32 = 4;

/// A single line of text together with the style it was recorded under.
///
/// Empty text is meaningful: it still takes up vertical space when laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// The text content
    pub text: String,

    /// Style snapshot at the time the line was recorded
    pub style: StyleState,
}

impl Line {
    /// Create a line with the given style.
    pub fn new(text: impl Into<String>, style: StyleState) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an empty spacing line.
    pub fn blank(style: StyleState) -> Self {
        Self::new(String::new(), style)
    }

    /// Check if this line only provides vertical spacing.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Approximate rendered width using a fixed-pitch estimate of half the
    /// font size per character.
    pub fn approx_width(&self) -> f32 {
        self.style.font_size as f32 * 0.5 * self.text.chars().count() as f32
    }

    /// Vertical distance consumed by this line.
    pub fn advance(&self) -> f32 {
        self.style.font_size as f32 + LINE_GAP as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_metrics() {
        let line = Line::new("Hi", StyleState::default().with_font_size(20));
        assert_eq!(line.approx_width(), 20.0);
        assert_eq!(line.advance(), 24.0);
    }

    #[test]
    fn test_blank_line_still_advances() {
        let line = Line::blank(StyleState::default());
        assert!(line.is_blank());
        assert_eq!(line.approx_width(), 0.0);
        assert_eq!(line.advance(), 16.0);
    }

    #[test]
    fn test_advance_with_huge_font_size() {
        let line = Line::new("A", StyleState::default().with_font_size(u32::MAX));
        assert!(line.advance() >= u32::MAX as f32);
    }
}
