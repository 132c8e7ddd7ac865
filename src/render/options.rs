//! PDF output options and configuration.

/// Options for assembling a PDF document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfOptions {
    /// Flate-compress page content streams
    pub compress: bool,
}

impl PdfOptions {
    /// Create new options with defaults (uncompressed output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Compress content streams.
    pub fn compressed(self) -> Self {
        self.with_compression(true)
    }
}
