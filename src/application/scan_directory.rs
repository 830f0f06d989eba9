//! Scan directory use case
//!
//! Checks every direct entry of a directory. Not recursive: entries that are
//! directories themselves are reported as irregular files.

use crate::application::check_file::CheckFileUseCase;
use crate::application::progress::ProgressState;
use crate::application::reporter::Reporter;
use crate::core::{io_reason, RunError};
use crate::domain::entities::{FileCandidate, RunStatistics};
use crate::domain::repositories::ContentTypeOracle;
use crate::infrastructure::filesystem;
use chrono::Local;
use std::path::Path;

/// Scan directory use case
pub struct ScanDirectoryUseCase<'a, O: ContentTypeOracle> {
    checker: &'a CheckFileUseCase<O>,
    progress: &'a ProgressState,
}

impl<'a, O: ContentTypeOracle> ScanDirectoryUseCase<'a, O> {
    /// Creates a new scan directory use case
    pub fn new(checker: &'a CheckFileUseCase<O>, progress: &'a ProgressState) -> Self {
        Self { checker, progress }
    }

    /// Executes the scan and returns its statistics.
    ///
    /// An enumeration failure is reported once, after the entries read so
    /// far have been checked.
    pub fn execute(&self, dir: &Path, reporter: &mut dyn Reporter) -> RunStatistics {
        let mut stats = RunStatistics::new();
        let dir = filesystem::normalize_dir(dir);
        self.progress.begin_run(Local::now());
        tracing::info!("starting directory scan of {}", dir.display());

        match filesystem::list_directory(&dir) {
            Ok(listing) => {
                tracing::debug!("{} entries in {}", listing.entries.len(), dir.display());
                for (i, path) in listing.entries.into_iter().enumerate() {
                    let candidate = FileCandidate::new(i + 1, path);
                    self.checker
                        .process(&candidate, self.progress, &mut stats, reporter);
                }
                if let Some(e) = listing.error {
                    reporter.run_error(&RunError::ReadDir {
                        path: dir.display().to_string(),
                        reason: io_reason(&e),
                    });
                }
            }
            Err(e) => reporter.run_error(&RunError::OpenDir {
                path: dir.display().to_string(),
                reason: io_reason(&e),
            }),
        }

        self.progress.finish();
        tracing::info!("directory scan finished: {} files analyzed", stats.analyzed());
        reporter.summary(&stats);
        stats
    }
}
