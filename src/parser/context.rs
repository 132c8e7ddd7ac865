//! Explicit parser state threaded through each input line.

use log::{debug, warn};

use crate::model::{Document, Line, Page, StyleState};

use super::classify::{classify, LineClass};
use super::style::parse_style;

/// The complete state of a parse in progress.
///
/// Feed input lines one at a time with [`feed`](Self::feed), then call
/// [`finish`](Self::finish) to obtain the document.
#[derive(Debug, Clone, Default)]
pub struct ParserContext {
    /// Style applied to the next recorded line
    style: StyleState,

    /// The page being filled, if a page is open
    page: Option<Page>,

    /// Pages finalized so far
    document: Document,

    /// Number of input lines consumed
    line_number: usize,
}

impl ParserContext {
    /// Create a context with no open page and the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style currently in effect.
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Check if a page is open.
    pub fn is_page_open(&self) -> bool {
        self.page.is_some()
    }

    /// The open page, if any.
    pub fn open_page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Pages finalized so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of input lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consume one raw input line.
    pub fn feed(&mut self, raw: &str) {
        self.apply(classify(raw));
    }

    /// Apply an already classified input line.
    pub fn apply(&mut self, class: LineClass<'_>) {
        self.line_number += 1;

        match class {
            LineClass::Comment => {}
            LineClass::Blank => self.record(String::new()),
            LineClass::Text(text) => self.record(text.to_string()),
            LineClass::CloseDirective => self.close_page(),
            LineClass::OpenDirective { params } => {
                if self.page.is_none() {
                    debug!("Opening page at line {}", self.line_number);
                    self.page = Some(Page::new());
                }
                self.style = parse_style(params);
            }
            LineClass::Malformed => {
                warn!(
                    "Skipping directive without closing bracket at line {}",
                    self.line_number
                );
            }
        }
    }

    /// Finish parsing. An open page with lines is kept; an empty one is dropped.
    pub fn finish(mut self) -> Document {
        if self.page.is_some() {
            debug!("Input ended inside an open page");
            self.close_page();
        }
        self.document
    }

    /// Record a line into the open page. Outside a page the text is discarded.
    fn record(&mut self, text: String) {
        if let Some(page) = self.page.as_mut() {
            page.add_line(Line::new(text, self.style));
        }
    }

    fn close_page(&mut self) {
        let Some(page) = self.page.take() else {
            return;
        };

        if page.is_empty() {
            warn!("Dropping empty page closed at line {}", self.line_number);
            return;
        }

        debug!(
            "Page {} finalized with {} line(s)",
            self.document.page_count() + 1,
            page.line_count()
        );
        self.document.add_page(page);
    }
}
