//! File signature entity
//!
//! Magic bytes that identify a content type when found at a fixed offset
//! from the start of a file.

/// A magic-byte signature and the MIME type it identifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignature {
    /// MIME type reported when the signature matches
    mime: &'static str,
    /// The magic bytes
    magic: Vec<u8>,
    /// Offset from the start where the magic bytes must appear (usually 0)
    offset: usize,
}

impl FileSignature {
    /// Creates a signature anchored at the start of the file
    pub fn new(mime: &'static str, magic: impl Into<Vec<u8>>) -> Self {
        Self {
            mime,
            magic: magic.into(),
            offset: 0,
        }
    }

    /// Moves the signature to a custom offset
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn magic(&self) -> &[u8] {
        &self.magic
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Checks the signature against a file header
    pub fn matches(&self, header: &[u8]) -> bool {
        header
            .get(self.offset..self.offset + self.magic.len())
            .is_some_and(|window| window == self.magic.as_slice())
    }
}
