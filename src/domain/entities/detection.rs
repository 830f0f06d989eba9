//! Detection result entity
//!
//! What a content-type oracle says about one file.

/// Subtype the oracles use to flag a zero-byte file
pub const EMPTY_SUBTYPE: &str = "x-empty";

/// MIME reported for zero-byte files
pub const EMPTY_MIME: &str = "inode/x-empty";

/// Outcome of content-type detection for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionResult {
    /// A `type/subtype` string such as `image/png`
    Mime(String),
    /// The file has no content
    Empty,
}

impl DetectionResult {
    /// Builds a result from one line of oracle output.
    ///
    /// Trailing line terminators are dropped. Any MIME whose subtype is
    /// `x-empty` becomes [`DetectionResult::Empty`].
    pub fn from_mime_line(line: &str) -> Self {
        let mime = line.trim_end_matches(['\n', '\r']);
        if mime_subtype(mime) == EMPTY_SUBTYPE {
            DetectionResult::Empty
        } else {
            DetectionResult::Mime(mime.to_string())
        }
    }

    /// Returns the MIME string, using `inode/x-empty` for empty files
    pub fn mime(&self) -> &str {
        match self {
            DetectionResult::Mime(mime) => mime,
            DetectionResult::Empty => EMPTY_MIME,
        }
    }

    pub fn is_empty_file(&self) -> bool {
        match self {
            DetectionResult::Empty => true,
            DetectionResult::Mime(mime) => mime_subtype(mime) == EMPTY_SUBTYPE,
        }
    }
}

/// Returns everything after the final `/` of a MIME string.
///
/// A string without `/` is returned whole.
pub fn mime_subtype(mime: &str) -> &str {
    match mime.rfind('/') {
        Some(idx) => &mime[idx + 1..],
        None => mime,
    }
}
