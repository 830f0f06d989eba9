//! Run batch use case
//!
//! Checks every path listed in a text file, one path per line.

use crate::application::check_file::CheckFileUseCase;
use crate::application::progress::ProgressState;
use crate::application::reporter::Reporter;
use crate::core::{io_reason, RunError};
use crate::domain::entities::{FileCandidate, RunStatistics};
use crate::domain::repositories::ContentTypeOracle;
use chrono::Local;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::os::unix::ffi::OsStringExt;
use std::path::{Path, PathBuf};

/// Run batch use case
///
/// Blank lines are skipped and not counted. Candidates are numbered from 1
/// in list order; the progress state is advanced before each one.
pub struct RunBatchUseCase<'a, O: ContentTypeOracle> {
    checker: &'a CheckFileUseCase<O>,
    progress: &'a ProgressState,
}

impl<'a, O: ContentTypeOracle> RunBatchUseCase<'a, O> {
    /// Creates a new run batch use case
    pub fn new(checker: &'a CheckFileUseCase<O>, progress: &'a ProgressState) -> Self {
        Self { checker, progress }
    }

    /// Executes the batch run and returns its statistics.
    ///
    /// An unreadable list is reported through `reporter` and yields empty
    /// statistics; the summary is printed either way.
    pub fn execute(&self, list_path: &Path, reporter: &mut dyn Reporter) -> RunStatistics {
        let mut stats = RunStatistics::new();
        self.progress.begin_run(Local::now());
        tracing::info!("starting batch run from {}", list_path.display());

        match File::open(list_path) {
            Ok(file) => {
                if let Err(e) = self.check_lines(BufReader::new(file), &mut stats, reporter) {
                    reporter.run_error(&RunError::ReadList {
                        path: list_path.display().to_string(),
                        reason: io_reason(&e),
                    });
                }
            }
            Err(e) => reporter.run_error(&RunError::OpenList {
                path: list_path.display().to_string(),
                reason: io_reason(&e),
            }),
        }

        self.progress.finish();
        tracing::info!("batch run finished: {} files analyzed", stats.analyzed());
        reporter.summary(&stats);
        stats
    }

    fn check_lines<R: BufRead>(
        &self,
        reader: R,
        stats: &mut RunStatistics,
        reporter: &mut dyn Reporter,
    ) -> std::io::Result<()> {
        let mut index = 0;
        for line in reader.split(b'\n') {
            let Some(path) = candidate_path(line?) else {
                continue;
            };
            index += 1;
            let candidate = FileCandidate::new(index, path);
            self.checker.process(&candidate, self.progress, stats, reporter);
        }
        Ok(())
    }
}

/// Turns one raw list line into a path, or `None` for a blank line
fn candidate_path(mut line: Vec<u8>) -> Option<PathBuf> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    if line.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(PathBuf::from(OsString::from_vec(line)))
}
