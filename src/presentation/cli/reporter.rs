//! Console output of verdicts and summaries

use crate::application::Reporter;
use crate::core::{CandidateError, RunError};
use crate::domain::entities::{FileCandidate, RunStatistics, Verdict};
use std::io::{self, Stderr, Stdout, Write};

/// Output stream a line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Formats the line printed for one verdict
pub fn verdict_line(path: &str, verdict: &Verdict) -> (Stream, String) {
    match verdict {
        Verdict::Ok { extension, subtype } => (
            Stream::Stdout,
            format!("[OK] '{path}': extension '{extension}' matches file type '{subtype}'"),
        ),
        Verdict::Mismatch { extension, subtype } => (
            Stream::Stdout,
            format!("[MISMATCH] '{path}': extension is '{extension}', file type is '{subtype}'"),
        ),
        Verdict::Unsupported { mime } => (
            Stream::Stdout,
            format!("[INFO] '{path}': type '{mime}' is not supported by checkFile"),
        ),
        Verdict::Empty => (Stream::Stdout, format!("[INFO] '{path}': is an empty file")),
        Verdict::Error(CandidateError::Unreadable(reason)) => (
            Stream::Stderr,
            format!("[ERROR] cannot open file '{path}' -- {reason}"),
        ),
        Verdict::Error(e) => (Stream::Stderr, format!("[ERROR] '{path}': {e}")),
    }
}

/// Reporter writing OK, MISMATCH, INFO and SUMMARY lines to one stream and
/// ERROR lines to another
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// Reporter on the process's stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Returns the two streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit(&mut self, stream: Stream, line: &str) {
        let result = match stream {
            Stream::Stdout => writeln!(self.out, "{line}"),
            Stream::Stderr => writeln!(self.err, "{line}"),
        };
        if let Err(e) = result {
            tracing::debug!("cannot write report line: {e}");
        }
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn verdict(&mut self, candidate: &FileCandidate, verdict: &Verdict) {
        let (stream, line) = verdict_line(&candidate.display_path(), verdict);
        self.emit(stream, &line);
    }

    fn run_error(&mut self, error: &RunError) {
        self.emit(Stream::Stderr, &format!("[ERROR] {error}"));
    }

    fn summary(&mut self, stats: &RunStatistics) {
        self.emit(Stream::Stdout, &stats.summarize());
    }
}
