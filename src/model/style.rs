//! Styling context applied to parsed text lines.

use serde::{Deserialize, Serialize};

/// Font size used when a directive supplies none or an invalid one.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// An RGB fill color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    /// Create a color from its channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Look up a named color, ignoring case and surrounding whitespace.
    ///
    /// Unknown names map to black.
    pub fn from_name(name: &str) -> Self {
        match name
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_ascii_lowercase()
            .as_str()
        {
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "gray" | "grey" => Color::GRAY,
            _ => Color::BLACK,
        }
    }
}

/// Horizontal placement of a line on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Flush with the left margin
    #[default]
    Left,
    /// Centered on the page
    Center,
    /// Flush with the right margin
    Right,
}

impl Alignment {
    /// Look up an alignment name, ignoring case. Anything unrecognized is `Left`.
    pub fn from_name(name: &str) -> Self {
        match name
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_ascii_lowercase()
            .as_str()
        {
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// The style in effect while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleState {
    /// Font size in points (always positive)
    pub font_size: u32,

    /// Fill color
    pub color: Color,

    /// Horizontal alignment
    pub alignment: Alignment,

    /// Whether lines stack up from the bottom margin instead of down from the top
    pub bottom_anchored: bool,
}

impl StyleState {
    /// Set the font size.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Anchor lines to the bottom of the page.
    pub fn bottom_anchored(mut self, bottom_anchored: bool) -> Self {
        self.bottom_anchored = bottom_anchored;
        self
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
            alignment: Alignment::Left,
            bottom_anchored: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("red"), Color::RED);
        assert_eq!(Color::from_name("  BLUE "), Color::BLUE);
        assert_eq!(Color::from_name("Grey"), Color::GRAY);
        assert_eq!(Color::from_name("gray"), Color::GRAY);
        assert_eq!(Color::from_name("white"), Color::WHITE);
        assert_eq!(Color::from_name("green"), Color::GREEN);
        assert_eq!(Color::from_name("magenta"), Color::BLACK);
        assert_eq!(Color::from_name(""), Color::BLACK);
        assert_eq!(Color::from_name("\u{a0}red"), Color::BLACK);
        assert_eq!(Alignment::from_name("\u{2003}center"), Alignment::Left);
    }

    #[test]
    fn test_alignment_from_name() {
        assert_eq!(Alignment::from_name("CENTER"), Alignment::Center);
        assert_eq!(Alignment::from_name("right"), Alignment::Right);
        assert_eq!(Alignment::from_name("left"), Alignment::Left);
        assert_eq!(Alignment::from_name("justify"), Alignment::Left);
    }

    #[test]
    fn test_default_style() {
        let style = StyleState::default();
        assert_eq!(style.font_size, 12);
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.alignment, Alignment::Left);
        assert!(!style.bottom_anchored);
    }
}
