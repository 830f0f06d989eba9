//! Supported content types
//!
//! The short-form types (MIME subtypes) whose extensions checkFile can
//! verify. Anything else is reported as unsupported.

use std::fmt;

/// Content types that can be compared against a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedType {
    /// GIF image
    Gif,
    /// HTML document
    Html,
    /// JPEG image
    Jpeg,
    /// MP4 video
    Mp4,
    /// PDF document
    Pdf,
    /// PNG image
    Png,
    /// ZIP archive
    Zip,
}

impl SupportedType {
    /// Every supported type, in alphabetical order
    pub const ALL: [SupportedType; 7] = [
        SupportedType::Gif,
        SupportedType::Html,
        SupportedType::Jpeg,
        SupportedType::Mp4,
        SupportedType::Pdf,
        SupportedType::Png,
        SupportedType::Zip,
    ];

    /// Looks up a MIME subtype. The comparison is exact: `PNG` is not `png`.
    pub fn from_subtype(subtype: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == subtype)
    }

    /// Returns the short form, which doubles as the canonical extension
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedType::Gif => "gif",
            SupportedType::Html => "html",
            SupportedType::Jpeg => "jpeg",
            SupportedType::Mp4 => "mp4",
            SupportedType::Pdf => "pdf",
            SupportedType::Png => "png",
            SupportedType::Zip => "zip",
        }
    }

    /// Returns the full MIME type as reported by `file --mime-type`
    pub fn mime(&self) -> &'static str {
        match self {
            SupportedType::Gif => "image/gif",
            SupportedType::Html => "text/html",
            SupportedType::Jpeg => "image/jpeg",
            SupportedType::Mp4 => "video/mp4",
            SupportedType::Pdf => "application/pdf",
            SupportedType::Png => "image/png",
            SupportedType::Zip => "application/zip",
        }
    }
}

impl fmt::Display for SupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
