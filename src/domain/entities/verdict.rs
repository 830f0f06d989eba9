//! Verdict entity
//!
//! The classification outcome for one candidate file.

use super::supported_type::SupportedType;
use crate::core::CandidateError;

/// Result of checking one file
#[derive(Debug)]
pub enum Verdict {
    /// The extension matches the detected type
    Ok {
        /// Extension as found in the path (lowercased, `jpg` kept as is)
        extension: String,
        subtype: SupportedType,
    },
    /// The extension names a different type than the content
    Mismatch {
        extension: String,
        subtype: SupportedType,
    },
    /// The detected type is outside the supported set
    Unsupported {
        /// Full MIME string reported by the oracle
        mime: String,
    },
    /// The file has no content
    Empty,
    /// The file could not be classified at all
    Error(CandidateError),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok { .. })
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verdict::Mismatch { .. })
    }

    /// Whether this verdict lands in the error counter.
    ///
    /// Unsupported and empty files are informational but still counted as
    /// errors, as every earlier release of checkFile did.
    pub fn counts_as_error(&self) -> bool {
        matches!(
            self,
            Verdict::Unsupported { .. } | Verdict::Empty | Verdict::Error(_)
        )
    }
}
