//! Positioning of lines on the page canvas.
//!
//! Each page is split once into top-flowing and bottom-anchored lines. The
//! two groups are laid out independently: top lines flow downward from
//! [`TOP_BASELINE`] in source order, bottom lines stack upward from
//! [`BOTTOM_BASELINE`] in reverse source order, so the last anchored line
//! in the source sits closest to the page edge.

use crate::model::{Alignment, Line, Page};

use super::geometry::{BOTTOM_BASELINE, LEFT_MARGIN, PAGE_WIDTH, RIGHT_MARGIN, TOP_BASELINE};

/// A line with its absolute baseline position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedLine<'a> {
    /// The source line
    pub line: &'a Line,
    /// Left edge of the text
    pub x: f32,
    /// Baseline
    pub y: f32,
}

/// Horizontal start of a line, clamped so text never begins left of the margin.
pub fn line_x(line: &Line) -> f32 {
    let width = line.approx_width();
    match line.style.alignment {
        Alignment::Left => LEFT_MARGIN,
        Alignment::Center => ((PAGE_WIDTH - width) / 2.0).max(LEFT_MARGIN),
        Alignment::Right => (PAGE_WIDTH - RIGHT_MARGIN - width).max(LEFT_MARGIN),
    }
}

/// Lay out lines downward from `start_y` in the given order.
///
/// Returns the positioned lines and the baseline the next line would take.
pub fn layout_top<'a>(lines: &[&'a Line], start_y: f32) -> (Vec<PositionedLine<'a>>, f32) {
    let mut y = start_y;
    let positioned = lines
        .iter()
        .map(|&line| {
            let placed = PositionedLine {
                line,
                x: line_x(line),
                y,
            };
            y -= line.advance();
            placed
        })
        .collect();
    (positioned, y)
}

/// Lay out lines upward from `start_y`, last line first.
///
/// Returns the positioned lines in placement order and the baseline the next
/// line would take.
pub fn layout_bottom<'a>(lines: &[&'a Line], start_y: f32) -> (Vec<PositionedLine<'a>>, f32) {
    let mut y = start_y;
    let positioned = lines
        .iter()
        .rev()
        .map(|&line| {
            let placed = PositionedLine {
                line,
                x: line_x(line),
                y,
            };
            y += line.advance();
            placed
        })
        .collect();
    (positioned, y)
}

/// Position every line of a page: top lines first, then bottom lines.
pub fn position_page(page: &Page) -> Vec<PositionedLine<'_>> {
    let (top, bottom) = page.partition();
    let (mut positioned, _) = layout_top(&top, TOP_BASELINE);
    let (anchored, _) = layout_bottom(&bottom, BOTTOM_BASELINE);
    positioned.extend(anchored);
    positioned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleState;

    fn line(text: &str, size: u32, alignment: Alignment) -> Line {
        Line::new(
            text,
            StyleState::default()
                .with_font_size(size)
                .with_alignment(alignment),
        )
    }

    #[test]
    fn test_line_x_alignments() {
        assert_eq!(line_x(&line("Hello", 12, Alignment::Left)), 72.0);
        assert_eq!(line_x(&line("Hi", 20, Alignment::Center)), 296.0);
        // 612 - 72 - 10 * 0.5 * 4
        assert_eq!(line_x(&line("abcd", 10, Alignment::Right)), 520.0);
    }

    #[test]
    fn test_line_x_clamps_wide_text() {
        let wide = "x".repeat(200);
        assert_eq!(line_x(&line(&wide, 12, Alignment::Center)), LEFT_MARGIN);
        assert_eq!(line_x(&line(&wide, 12, Alignment::Right)), LEFT_MARGIN);
    }

    #[test]
    fn test_layout_top_advances_by_size_plus_four() {
        let a = line("a", 12, Alignment::Left);
        let gap = line("", 20, Alignment::Left);
        let b = line("b", 10, Alignment::Left);
        let (placed, next) = layout_top(&[&a, &gap, &b], 750.0);

        let ys: Vec<f32> = placed.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![750.0, 734.0, 710.0]);
        assert_eq!(next, 696.0);
    }

    #[test]
    fn test_layout_bottom_reverses_source_order() {
        let first = line("first", 12, Alignment::Left);
        let last = line("last", 10, Alignment::Left);
        let (placed, next) = layout_bottom(&[&first, &last], 72.0);

        assert_eq!(placed[0].line.text, "last");
        assert_eq!(placed[0].y, 72.0);
        assert_eq!(placed[1].line.text, "first");
        assert_eq!(placed[1].y, 86.0);
        assert_eq!(next, 102.0);
    }

    #[test]
    fn test_position_page_emits_top_then_bottom() {
        let footer = StyleState::default().bottom_anchored(true);
        let page = Page::with_lines(vec![
            Line::new("f1", footer),
            Line::new("title", StyleState::default()),
            Line::new("f2", footer),
        ]);

        let order: Vec<&str> = position_page(&page)
            .iter()
            .map(|p| p.line.text.as_str())
            .collect();
        assert_eq!(order, ["title", "f2", "f1"]);
    }

    #[test]
    fn test_empty_page_positions_nothing() {
        assert!(position_page(&Page::new()).is_empty());
    }
}
