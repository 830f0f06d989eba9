//! Classifier service
//!
//! Compares the extension a file claims with the content type an oracle
//! detected and produces a [`Verdict`].

use crate::domain::entities::{mime_subtype, DetectionResult, SupportedType, Verdict};

/// Classifies one file from its path and detected content type
///
/// # Example
///
/// ```
/// use checkfile::domain::entities::{DetectionResult, Verdict};
/// use checkfile::domain::services::classify;
///
/// let detected = DetectionResult::Mime("image/jpeg".to_string());
/// assert!(matches!(classify("holiday.JPG", &detected), Verdict::Ok { .. }));
/// ```
pub fn classify(path: &str, detection: &DetectionResult) -> Verdict {
    let mime = match detection {
        DetectionResult::Empty => return Verdict::Empty,
        DetectionResult::Mime(mime) => mime.as_str(),
    };

    if detection.is_empty_file() {
        return Verdict::Empty;
    }

    let Some(subtype) = SupportedType::from_subtype(mime_subtype(mime)) else {
        return Verdict::Unsupported {
            mime: mime.to_string(),
        };
    };

    let extension = file_extension(path);
    if normalize_extension(&extension) == subtype.as_str() {
        Verdict::Ok { extension, subtype }
    } else {
        Verdict::Mismatch { extension, subtype }
    }
}

/// Returns the lowercased text after the final `.` of the file name.
///
/// Only the last path component is inspected, so `./photos/cat` has no
/// extension. A name without `.` yields an empty string.
pub fn file_extension(path: &str) -> String {
    let name = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Maps extension aliases onto the short form the oracle reports
pub fn normalize_extension(extension: &str) -> &str {
    match extension {
        "jpg" => "jpeg",
        other => other,
    }
}
