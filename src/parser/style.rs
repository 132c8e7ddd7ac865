//! Decoding of style directive parameters.
//!
//! Parameters are positional and comma separated:
//! `size, color-name, align-name, anchor-keyword`. Any position that is
//! missing takes its default, never the previously active value.

use crate::model::{Alignment, Color, StyleState, DEFAULT_FONT_SIZE};

/// Anchor keyword that moves lines to the bottom of the page.
const BOTTOM_KEYWORD: &str = "bottom";

/// Build the style described by a directive's parameter list.
pub fn parse_style(params: &str) -> StyleState {
    let params = trim_ascii(params);
    if params.is_empty() {
        return StyleState::default();
    }

    let mut parts = split_params(params).into_iter();

    StyleState {
        font_size: parts
            .next()
            .map(parse_font_size)
            .unwrap_or(DEFAULT_FONT_SIZE),
        color: parts.next().map(Color::from_name).unwrap_or(Color::BLACK),
        alignment: parts.next().map(Alignment::from_name).unwrap_or_default(),
        bottom_anchored: parts
            .next()
            .map(|anchor| anchor.eq_ignore_ascii_case(BOTTOM_KEYWORD))
            .unwrap_or(false),
    }
}

/// Split on commas, trimming each part. A trailing comma does not add an
/// empty final part.
fn split_params(params: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = params.split(',').map(trim_ascii).collect();
    if params.ends_with(',') {
        parts.pop();
    }
    parts
}

/// Strip ASCII whitespace only; other Unicode spaces are content.
pub(crate) fn trim_ascii(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Read the leading integer of `part` as a C `int`. Zero, negative,
/// out-of-range or non-numeric values give the default size.
fn parse_font_size(part: &str) -> u32 {
    let end = part
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'))))
        .map(|(i, _)| i)
        .unwrap_or(part.len());

    part[..end]
        .parse::<i32>()
        .ok()
        .filter(|&size| size > 0)
        .map(i32::unsigned_abs)
        .unwrap_or(DEFAULT_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_parameter_list() {
        let style = parse_style("20, red, center, bottom");
        assert_eq!(style.font_size, 20);
        assert_eq!(style.color, Color::RED);
        assert_eq!(style.alignment, Alignment::Center);
        assert!(style.bottom_anchored);
    }

    #[test]
    fn test_missing_positions_take_defaults() {
        let style = parse_style("18");
        assert_eq!(style, StyleState::default().with_font_size(18));

        let style = parse_style("18, blue");
        assert_eq!(style.color, Color::BLUE);
        assert_eq!(style.alignment, Alignment::Left);
        assert!(!style.bottom_anchored);
    }

    #[test]
    fn test_empty_params_reset_everything() {
        assert_eq!(parse_style(""), StyleState::default());
        assert_eq!(parse_style("   "), StyleState::default());
    }

    #[test]
    fn test_font_size_fallbacks() {
        assert_eq!(parse_font_size("0"), 12);
        assert_eq!(parse_font_size("-4"), 12);
        assert_eq!(parse_font_size("big"), 12);
        assert_eq!(parse_font_size(""), 12);
        assert_eq!(parse_font_size("99999999999"), 12);
        assert_eq!(parse_font_size("16pt"), 16);
        assert_eq!(parse_font_size("+9"), 9);
    }

    #[test]
    fn test_font_size_outside_int_range() {
        assert_eq!(parse_font_size("4294967295"), 12);
        assert_eq!(parse_font_size("3000000000"), 12);
        assert_eq!(parse_font_size("2147483648"), 12);
        assert_eq!(parse_font_size("2147483647"), 2147483647);
        assert_eq!(parse_style("4294967295, red").font_size, 12);
    }

    #[test]
    fn test_only_ascii_whitespace_is_trimmed() {
        assert_eq!(split_params("20,\u{a0}red"), vec!["20", "\u{a0}red"]);
        assert_eq!(parse_style("20,\u{a0}red").color, Color::BLACK);
        assert_eq!(parse_style("\t20 ,\tred\t").color, Color::RED);
    }

    #[test]
    fn test_case_insensitive_names() {
        let style = parse_style("10, GREY, Right, BOTTOM");
        assert_eq!(style.color, Color::GRAY);
        assert_eq!(style.alignment, Alignment::Right);
        assert!(style.bottom_anchored);
    }

    #[test]
    fn test_unknown_anchor_is_top() {
        assert!(!parse_style("10, red, left, top").bottom_anchored);
        assert!(!parse_style("10, red, left, middle").bottom_anchored);
    }

    #[test]
    fn test_split_params() {
        assert_eq!(split_params("20, red,"), vec!["20", "red"]);
        assert_eq!(split_params(",red"), vec!["", "red"]);
        assert_eq!(split_params("20 ,  red , center"), vec!["20", "red", "center"]);
    }

    #[test]
    fn test_leading_empty_size() {
        let style = parse_style(",red");
        assert_eq!(style.font_size, 12);
        assert_eq!(style.color, Color::RED);
    }
}
