//! Run statistics entity
//!
//! Counters accumulated over one batch or directory run.

use super::verdict::Verdict;
use std::fmt;

/// Per-run counters.
///
/// `analyzed == ok + mismatch + error` holds after every [`record`](Self::record).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    analyzed: usize,
    ok: usize,
    mismatch: usize,
    error: usize,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict of one candidate
    pub fn record(&mut self, verdict: &Verdict) {
        self.analyzed += 1;
        match verdict {
            Verdict::Ok { .. } => self.ok += 1,
            Verdict::Mismatch { .. } => self.mismatch += 1,
            Verdict::Unsupported { .. } | Verdict::Empty | Verdict::Error(_) => self.error += 1,
        }
    }

    pub fn analyzed(&self) -> usize {
        self.analyzed
    }

    pub fn ok(&self) -> usize {
        self.ok
    }

    pub fn mismatch(&self) -> usize {
        self.mismatch
    }

    pub fn errors(&self) -> usize {
        self.error
    }

    /// Produces the summary line, consuming the statistics
    pub fn summarize(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[SUMMARY] files analyzed: {}; files OK: {}; files mismatch: {}; errors: {}",
            self.analyzed, self.ok, self.mismatch, self.error
        )
    }
}
