//! Check file use case
//!
//! Runs the per-candidate pipeline: open check, content detection,
//! classification. Also drives single-file mode.

use crate::application::progress::ProgressState;
use crate::application::reporter::Reporter;
use crate::core::CandidateError;
use crate::domain::entities::{FileCandidate, RunStatistics, Verdict};
use crate::domain::repositories::ContentTypeOracle;
use crate::domain::services::classify;
use crate::infrastructure::filesystem;
use std::path::Path;

/// Check file use case
///
/// Owns the content-type oracle; batch and directory runs borrow it to check
/// each of their candidates.
pub struct CheckFileUseCase<O: ContentTypeOracle> {
    oracle: O,
}

impl<O: ContentTypeOracle> CheckFileUseCase<O> {
    /// Creates a new check file use case
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Returns the oracle used for detection
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Checks one candidate. Never fails: problems become an error verdict.
    pub fn check(&self, candidate: &FileCandidate) -> Verdict {
        if let Err(e) = filesystem::check_candidate(candidate.path()) {
            tracing::debug!("{}: not checkable: {}", candidate, e);
            return Verdict::Error(e);
        }

        match self.oracle.detect(candidate.path()) {
            Ok(detection) => {
                tracing::debug!(
                    "{}: {} reports '{}'",
                    candidate,
                    self.oracle.name(),
                    detection.mime()
                );
                classify(&candidate.display_path(), &detection)
            }
            Err(e) => {
                tracing::warn!("{}: detection failed: {}", candidate, e);
                Verdict::Error(CandidateError::Detection(e))
            }
        }
    }

    /// Single-file mode: checks `path` and reports its verdict.
    ///
    /// No progress is tracked and no summary is printed.
    pub fn execute(&self, path: &Path, reporter: &mut dyn Reporter) -> Verdict {
        let candidate = FileCandidate::new(1, path);
        let verdict = self.check(&candidate);
        reporter.verdict(&candidate, &verdict);
        verdict
    }

    /// One step of a batch or directory run: publish progress, check,
    /// count and report.
    pub(crate) fn process(
        &self,
        candidate: &FileCandidate,
        progress: &ProgressState,
        stats: &mut RunStatistics,
        reporter: &mut dyn Reporter,
    ) {
        progress.advance(candidate);
        let verdict = self.check(candidate);
        stats.record(&verdict);
        reporter.verdict(candidate, &verdict);
    }
}
