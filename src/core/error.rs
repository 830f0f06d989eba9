use crate::domain::repositories::DetectionError;
use std::io;
use thiserror::Error;

/// Reasons a single candidate could not be classified
#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("cannot open file -- {0}")]
    Unreadable(String),

    #[error("irregular files are not supported by checkFile")]
    Irregular,

    #[error("cannot determine file type -- {0}")]
    Detection(#[from] DetectionError),
}

impl CandidateError {
    pub fn unreadable(err: &io::Error) -> Self {
        CandidateError::Unreadable(io_reason(err))
    }
}

/// Failures of a whole run that do not belong to one candidate
#[derive(Error, Debug)]
pub enum RunError {
    #[error("cannot open file '{path}' -- {reason}")]
    OpenList { path: String, reason: String },

    #[error("cannot read file '{path}' -- {reason}")]
    ReadList { path: String, reason: String },

    #[error("cannot open dir '{path}' -- {reason}")]
    OpenDir { path: String, reason: String },

    #[error("cannot read dir '{path}' -- {reason}")]
    ReadDir { path: String, reason: String },
}

/// Renders an I/O error the way `strerror(3)` does, without the
/// `(os error N)` suffix std appends.
pub fn io_reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => {
            let text = err.to_string();
            match text.rfind(" (os error ") {
                Some(idx) => text[..idx].to_string(),
                None => text,
            }
        }
    }
}
