//! Document-level types.

use super::{Page, TextEncoding};
use serde::{Deserialize, Serialize};

/// A parsed layout: the finalized pages in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,

    /// Encoding of the source the text was read from
    #[serde(default)]
    pub encoding: TextEncoding,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: usize) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get(page_num - 1)
    }

    /// Set the source encoding used when the text is written out.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Line, StyleState};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_get_page_is_one_indexed() {
        let mut doc = Document::new();
        doc.add_page(Page::with_lines(vec![Line::new("first", StyleState::default())]));
        doc.add_page(Page::with_lines(vec![Line::new("second", StyleState::default())]));

        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(2).map(Page::plain_text).as_deref(), Some("second"));
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.plain_text(), "first\n\nsecond");
    }
}
