//! Error types shared across layers

mod error;

pub use error::{io_reason, CandidateError, RunError};
