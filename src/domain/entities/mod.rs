//! Domain entities
//!
//! Core objects of the extension checking domain.

mod candidate;
mod detection;
mod file_signature;
mod run_statistics;
mod supported_type;
mod verdict;

pub use candidate::FileCandidate;
pub use detection::{mime_subtype, DetectionResult, EMPTY_MIME, EMPTY_SUBTYPE};
pub use file_signature::FileSignature;
pub use run_statistics::RunStatistics;
pub use supported_type::SupportedType;
pub use verdict::Verdict;
