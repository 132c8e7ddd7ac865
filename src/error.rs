//! Error types for layoutpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for layoutpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a layout to PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// The layout source could not be read.
    #[error("Failed to read layout source {source_name}: {source}")]
    InputAccess {
        /// Path or description of the source
        source_name: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Parsing finished without producing a single page.
    #[error("No pages parsed from layout source")]
    EmptyDocument,

    /// I/O error when writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (JSON export).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an input access error for the named source.
    pub fn input_access(source_name: impl Into<String>, source: io::Error) -> Self {
        Error::InputAccess {
            source_name: source_name.into(),
            source,
        }
    }
}
