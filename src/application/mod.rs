//! Application layer
//!
//! Use cases that orchestrate domain logic: single-file checks, batch runs,
//! directory scans and the progress state they publish.

pub mod dto;
mod check_file;
pub mod progress;
mod reporter;
mod run_batch;
mod scan_directory;

pub use check_file::CheckFileUseCase;
pub use progress::{ProgressSnapshot, ProgressState, RunPhase, PROGRESS};
pub use reporter::Reporter;
pub use run_batch::RunBatchUseCase;
pub use scan_directory::ScanDirectoryUseCase;
