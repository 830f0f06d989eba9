//! checkFile - verify that file extensions match file contents
//!
//! Content types are detected from magic bytes (through the `file` command
//! or the built-in signature table) and compared with each file's
//! extension, for a single file, a list of files or a directory.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{CheckFileUseCase, Reporter, RunBatchUseCase, ScanDirectoryUseCase};
pub use domain::entities::{DetectionResult, RunStatistics, SupportedType, Verdict};
pub use domain::repositories::{ContentTypeOracle, DetectionError};
