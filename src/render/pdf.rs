//! PDF assembly from a parsed layout document.
//!
//! Object numbers are assigned in a fixed order: catalog, page tree, the
//! shared font, every page object, then every content stream. See
//! [`ObjectLayout`].

use log::{debug, info};

use crate::error::{Error, Result};
use crate::model::Document;

use super::content::{build_content, FONT_RESOURCE};
use super::geometry::{PAGE_HEIGHT, PAGE_WIDTH};
use super::layout::position_page;
use super::options::PdfOptions;
use super::writer::{ObjectWriter, PdfObject, WrittenPdf};

/// Version header followed by the binary marker comment.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Standard Type1 font shared by every page.
pub const BASE_FONT: &str = "Helvetica";

/// Object numbering for a document with a given page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectLayout {
    page_count: usize,
}

impl ObjectLayout {
    /// Document catalog.
    pub const CATALOG: usize = 1;
    /// Root of the page tree.
    pub const PAGES: usize = 2;
    /// Shared font resource.
    pub const FONT: usize = 3;

    /// Create the numbering for `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }

    /// Page object number for a 0-based page index.
    pub fn page(&self, index: usize) -> usize {
        Self::FONT + 1 + index
    }

    /// Content stream object number for a 0-based page index.
    pub fn content(&self, index: usize) -> usize {
        Self::FONT + 1 + self.page_count + index
    }

    /// Total number of objects.
    pub fn object_count(&self) -> usize {
        Self::FONT + 2 * self.page_count
    }
}

/// Assemble a document into PDF bytes.
pub fn to_pdf(doc: &Document, options: &PdfOptions) -> Result<Vec<u8>> {
    assemble(doc, options).map(WrittenPdf::into_bytes)
}

/// Assemble a document, keeping the object offsets and xref position.
pub fn assemble(doc: &Document, options: &PdfOptions) -> Result<WrittenPdf> {
    if doc.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let ids = ObjectLayout::new(doc.page_count());
    let mut writer = ObjectWriter::new(PDF_HEADER);

    writer.write_object(&catalog_object())?;
    writer.write_object(&page_tree_object(&ids))?;
    writer.write_object(&font_object())?;

    for index in 0..doc.page_count() {
        writer.write_object(&page_object(&ids, index))?;
    }

    for (index, page) in doc.pages.iter().enumerate() {
        let positioned = position_page(page);
        let content = build_content(&positioned, doc.encoding);
        debug!(
            "Page {}: {} positioned line(s), {} content bytes",
            index + 1,
            positioned.len(),
            content.len()
        );
        writer.write_object(&content_object(ids.content(index), &content, options)?)?;
    }

    let written = writer.finish(ObjectLayout::CATALOG)?;
    info!(
        "Assembled {} page(s), {} object(s), {} bytes",
        doc.page_count(),
        written.object_count(),
        written.bytes.len()
    );
    Ok(written)
}

fn catalog_object() -> PdfObject {
    PdfObject::new(
        ObjectLayout::CATALOG,
        format!("<< /Type /Catalog /Pages {} 0 R >>\n", ObjectLayout::PAGES),
    )
}

fn page_tree_object(ids: &ObjectLayout) -> PdfObject {
    let mut body = String::from("<< /Type /Pages /Kids [");
    for index in 0..ids.page_count {
        body.push_str(&format!(" {} 0 R", ids.page(index)));
    }
    body.push_str(&format!(" ] /Count {} >>\n", ids.page_count));
    PdfObject::new(ObjectLayout::PAGES, body)
}

fn font_object() -> PdfObject {
    PdfObject::new(
        ObjectLayout::FONT,
        format!("<< /Type /Font /Subtype /Type1 /BaseFont /{} >>\n", BASE_FONT),
    )
}

fn page_object(ids: &ObjectLayout, index: usize) -> PdfObject {
    let body = format!(
        "<< /Type /Page\n   /Parent {} 0 R\n   /MediaBox [0 0 {} {}]\n   /Resources << /Font << /{} {} 0 R >> >>\n   /Contents {} 0 R\n>>\n",
        ObjectLayout::PAGES,
        PAGE_WIDTH,
        PAGE_HEIGHT,
        FONT_RESOURCE,
        ObjectLayout::FONT,
        ids.content(index),
    );
    PdfObject::new(ids.page(index), body)
}

fn content_object(id: usize, content: &[u8], options: &PdfOptions) -> Result<PdfObject> {
    if options.compress {
        #[cfg(feature = "compression")]
        {
            let compressed = compress_data(content)?;
            return PdfObject::stream(id, &compressed, " /Filter /FlateDecode");
        }

        #[cfg(not(feature = "compression"))]
        log::warn!("Compression requested but the `compression` feature is disabled");
    }

    PdfObject::stream(id, content, "")
}

/// Compress data using Flate/Deflate compression.
#[cfg(feature = "compression")]
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
