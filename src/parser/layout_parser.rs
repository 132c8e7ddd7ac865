//! Layout source parser.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Document, TextEncoding};

use super::context::ParserContext;

/// Parser for layout description text.
///
/// Reading the source is the only step that can fail; once a parser exists,
/// [`parse`](Self::parse) always yields a document (possibly with no pages).
#[derive(Debug, Clone)]
pub struct LayoutParser {
    source: String,
    encoding: TextEncoding,
}

impl LayoutParser {
    /// Open a layout file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).map_err(|e| Error::input_access(path.display().to_string(), e))?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_bytes(bytes))
    }

    /// Create a parser over raw source bytes.
    ///
    /// Bytes that are not valid UTF-8 are decoded as Windows-1252.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let (source, encoding) = TextEncoding::decode(bytes);
        if encoding != TextEncoding::Utf8 {
            log::debug!("Source is not UTF-8, decoded as {:?}", encoding);
        }
        Self { source, encoding }
    }

    /// Create a parser over in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: text.into(),
            encoding: TextEncoding::Utf8,
        }
    }

    /// Read a layout from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::input_access("<reader>", e))?;
        Ok(Self::from_bytes(bytes))
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Encoding the source bytes were decoded with.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Parse the source into a document.
    pub fn parse(&self) -> Document {
        let mut context = ParserContext::new();
        for raw in self.source.lines() {
            context.feed(raw);
        }

        let document = context.finish().with_encoding(self.encoding);
        log::info!(
            "Parsed {} page(s) with {} line(s)",
            document.page_count(),
            document.line_count()
        );
        document
    }
}
