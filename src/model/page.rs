//! Page-level types.

use super::Line;
use serde::{Deserialize, Serialize};

/// A single page: the lines recorded between its opening and closing directives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Lines in source order
    pub lines: Vec<Line>,
}

impl Page {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from lines.
    pub fn with_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Split lines into top-flowing and bottom-anchored groups, keeping
    /// source order within each group.
    pub fn partition(&self) -> (Vec<&Line>, Vec<&Line>) {
        self.lines.iter().partition(|line| !line.style.bottom_anchored)
    }

    /// Get the text of all lines joined by newlines.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
