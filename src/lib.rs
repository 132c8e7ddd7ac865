//! # layoutpdf
//!
//! Convert small line-oriented page layout descriptions into PDF documents.
//!
//! A layout source groups text lines into pages with bracketed directives
//! and styles them with positional parameters:
//!
//! ```text
//! // comments run to the end of the line
//! [page1] 20, red, center
//! Quarterly Report
//! [body] 12
//! First line of the body.
//!
//! [footer] 9, gray, right, bottom
//! Page 1
//! [/page1]
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use layoutpdf::{parse_file, render};
//!
//! fn main() -> layoutpdf::Result<()> {
//!     let doc = parse_file("report.txt")?;
//!     let bytes = render::to_pdf(&doc, &render::PdfOptions::default())?;
//!     std::fs::write("report.pdf", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parser**: classifies each input line and applies it to an explicit
//!   parser context, producing a [`Document`] of styled [`Line`]s.
//! - **Renderer**: positions lines on a fixed 612x792 canvas and writes a
//!   PDF with a catalog, page tree, shared font, one page and one content
//!   stream per page, and an exact cross-reference table.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Alignment, Color, Document, Line, Page, StyleState, TextEncoding};
pub use parser::{LayoutParser, ParserContext};
pub use render::{JsonFormat, PdfOptions};

use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse a layout file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use layoutpdf::parse_file;
///
/// let doc = parse_file("report.txt").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = LayoutParser::open(path)?;
    Ok(parser.parse())
}

/// Parse layout text held in memory.
///
/// # Example
///
/// ```
/// let doc = layoutpdf::parse_str("[page]\nHello\n[/page]\n");
/// assert_eq!(doc.page_count(), 1);
/// ```
pub fn parse_str(text: &str) -> Document {
    LayoutParser::from_text(text).parse()
}

/// Parse a layout from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = LayoutParser::from_reader(reader)?;
    Ok(parser.parse())
}

/// Assemble a document into PDF bytes with default options.
///
/// Fails with [`Error::EmptyDocument`] if the document has no pages.
pub fn to_pdf(doc: &Document) -> Result<Vec<u8>> {
    render::to_pdf(doc, &PdfOptions::default())
}

/// Convert a layout file to a PDF file.
///
/// The whole PDF is built in memory before the output file is created, so a
/// failed conversion never leaves a partial file behind.
///
/// # Example
///
/// ```no_run
/// layoutpdf::convert_file("report.txt", "report.pdf").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    LayoutPdf::new().convert(input, output)
}

/// Output path conventionally paired with a layout name: `<name>.pdf`.
pub fn pdf_path_for(name: &Path) -> PathBuf {
    append_extension(name, "pdf")
}

/// Input path conventionally paired with a layout name: `<name>.txt`.
pub fn layout_path_for(name: &Path) -> PathBuf {
    append_extension(name, "txt")
}

/// Append an extension without replacing an existing one (`a.b` -> `a.b.txt`).
fn append_extension(name: &Path, ext: &str) -> PathBuf {
    let mut path = name.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// Builder for parsing and converting layout documents.
///
/// # Example
///
/// ```no_run
/// use layoutpdf::LayoutPdf;
///
/// let bytes = LayoutPdf::new()
///     .compressed()
///     .parse("report.txt")?
///     .to_pdf()?;
/// # Ok::<(), layoutpdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutPdf {
    pdf_options: PdfOptions,
}

impl LayoutPdf {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.pdf_options = self.pdf_options.with_compression(compress);
        self
    }

    /// Compress content streams.
    pub fn compressed(self) -> Self {
        self.with_compression(true)
    }

    /// Parse a layout file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<LayoutResult> {
        let document = parse_file(path)?;
        Ok(LayoutResult {
            document,
            pdf_options: self.pdf_options,
        })
    }

    /// Parse in-memory layout text.
    pub fn parse_str(self, text: &str) -> LayoutResult {
        LayoutResult {
            document: parse_str(text),
            pdf_options: self.pdf_options,
        }
    }

    /// Parse `input`, assemble the PDF and write it to `output`.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(self, input: P, output: Q) -> Result<()> {
        let bytes = self.parse(input)?.to_pdf()?;
        let output = output.as_ref();
        std::fs::write(output, &bytes)?;
        log::info!("Wrote {} bytes to {}", bytes.len(), output.display());
        Ok(())
    }
}

/// Result of parsing a layout source.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    /// The parsed document
    pub document: Document,
    /// PDF options to use
    pdf_options: PdfOptions,
}

impl LayoutResult {
    /// Assemble the PDF.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        render::to_pdf(&self.document, &self.pdf_options)
    }

    /// Convert the parsed layout to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text of all lines.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
