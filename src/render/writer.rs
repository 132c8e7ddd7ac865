//! Object table writer.
//!
//! Objects are appended to a growable buffer while the byte offset at which
//! each one begins is recorded on the side. The cross-reference section and
//! trailer are emitted from those offsets in a separate final pass.

use std::io::Write;

use crate::error::{Error, Result};

/// A numbered indirect object ready to be written.
///
/// `body` is everything between the `N 0 obj` line and `endobj`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfObject {
    /// Object number (1-based)
    pub id: usize,
    /// Serialized dictionary or stream
    pub body: Vec<u8>,
}

impl PdfObject {
    /// Create an object from a serialized body.
    pub fn new(id: usize, body: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }

    /// Create a stream object with the given extra dictionary entries.
    pub fn stream(id: usize, data: &[u8], extra_entries: &str) -> Result<Self> {
        let mut body = Vec::with_capacity(data.len() + 64);
        writeln!(body, "<< /Length {}{} >>\nstream", data.len(), extra_entries)?;
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream\n");
        Ok(Self { id, body })
    }
}

/// Writes objects sequentially and builds the cross-reference table.
#[derive(Debug, Clone)]
pub struct ObjectWriter {
    buffer: Vec<u8>,
    /// `offsets[i]` is where object `i + 1` begins
    offsets: Vec<usize>,
}

impl ObjectWriter {
    /// Start a new file with the given header bytes.
    pub fn new(header: &[u8]) -> Self {
        Self {
            buffer: header.to_vec(),
            offsets: Vec::new(),
        }
    }

    /// Number the next written object must carry.
    pub fn next_id(&self) -> usize {
        self.offsets.len() + 1
    }

    /// Offsets recorded so far, indexed by object number minus one.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Append an object, recording its starting offset.
    pub fn write_object(&mut self, object: &PdfObject) -> Result<()> {
        if object.id != self.next_id() {
            return Err(Error::Render(format!(
                "object {} written out of order, expected {}",
                object.id,
                self.next_id()
            )));
        }

        self.offsets.push(self.buffer.len());
        writeln!(self.buffer, "{} 0 obj", object.id)?;
        self.buffer.extend_from_slice(&object.body);
        self.buffer.extend_from_slice(b"endobj\n");

        log::debug!(
            "Wrote object {} at offset {} ({} bytes)",
            object.id,
            self.offsets[object.id - 1],
            object.body.len()
        );
        Ok(())
    }

    /// Emit the cross-reference section and trailer and return the file bytes.
    pub fn finish(self, root: usize) -> Result<WrittenPdf> {
        let Self {
            mut buffer,
            offsets,
        } = self;

        let xref_offset = buffer.len();
        let size = offsets.len() + 1;

        writeln!(buffer, "xref\n0 {}", size)?;
        buffer.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            writeln!(buffer, "{:010} 00000 n ", offset)?;
        }

        writeln!(
            buffer,
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF",
            size, root, xref_offset
        )?;

        Ok(WrittenPdf {
            bytes: buffer,
            offsets,
            xref_offset,
        })
    }
}

/// A finished file together with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPdf {
    /// Complete file contents
    pub bytes: Vec<u8>,
    /// Starting offset of each object, indexed by object number minus one
    pub offsets: Vec<usize>,
    /// Offset of the `xref` keyword
    pub xref_offset: usize,
}

impl WrittenPdf {
    /// Number of objects in the file, excluding the free entry.
    pub fn object_count(&self) -> usize {
        self.offsets.len()
    }

    /// Consume and return the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
