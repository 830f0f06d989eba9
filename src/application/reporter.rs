//! Output port for check results

use crate::core::RunError;
use crate::domain::entities::{FileCandidate, RunStatistics, Verdict};

/// Receives everything a run has to tell the user
pub trait Reporter {
    /// Called once per candidate, right after it is classified
    fn verdict(&mut self, candidate: &FileCandidate, verdict: &Verdict);

    /// Called for failures of the run itself (list or directory unreadable)
    fn run_error(&mut self, error: &RunError);

    /// Called once at the end of a batch or directory run
    fn summary(&mut self, stats: &RunStatistics);
}
