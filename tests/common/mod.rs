//! Shared test doubles

#![allow(dead_code)]

use checkfile::application::{ProgressSnapshot, ProgressState, Reporter};
use checkfile::core::RunError;
use checkfile::domain::entities::{DetectionResult, FileCandidate, RunStatistics, Verdict};
use checkfile::domain::repositories::{ContentTypeOracle, DetectionError};
use checkfile::presentation::cli::verdict_line;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Oracle answering from a table keyed by file name
#[derive(Default)]
pub struct MockOracle {
    mimes: HashMap<String, String>,
    failing: Vec<String>,
    progress: Option<Arc<ProgressState>>,
    /// Progress seen while each detection was running
    pub observed: RefCell<Vec<Option<ProgressSnapshot>>>,
    pub calls: RefCell<Vec<PathBuf>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, mime: &str) -> Self {
        self.mimes.insert(name.to_string(), mime.to_string());
        self
    }

    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    pub fn observing(mut self, progress: Arc<ProgressState>) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl ContentTypeOracle for MockOracle {
    fn detect(&self, path: &Path) -> Result<DetectionResult, DetectionError> {
        self.calls.borrow_mut().push(path.to_path_buf());
        if let Some(progress) = &self.progress {
            self.observed.borrow_mut().push(progress.snapshot());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            return Err(DetectionError::Io(io::Error::other("oracle crashed")));
        }
        let mime = self
            .mimes
            .get(&name)
            .map(String::as_str)
            .unwrap_or("application/octet-stream");
        Ok(DetectionResult::from_mime_line(mime))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Reporter keeping every line in memory
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Vec<String>,
    pub run_errors: Vec<String>,
    pub summaries: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn verdict(&mut self, candidate: &FileCandidate, verdict: &Verdict) {
        let (_, line) = verdict_line(&candidate.display_path(), verdict);
        self.lines.push(line);
    }

    fn run_error(&mut self, error: &RunError) {
        self.run_errors.push(format!("[ERROR] {error}"));
    }

    fn summary(&mut self, stats: &RunStatistics) {
        self.summaries.push(stats.summarize());
    }
}

/// Creates files with the given names and contents in a fresh directory
pub fn dir_with_files(files: &[(&str, &[u8])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, data) in files {
        fs::write(dir.path().join(name), data).unwrap();
    }
    dir
}

/// Writes a batch list file inside `dir`
pub fn write_list(dir: &Path, lines: &[String]) -> PathBuf {
    let list = dir.join("list.txt");
    fs::write(&list, lines.join("\n")).unwrap();
    list
}

pub fn assert_invariant(stats: &RunStatistics) {
    assert_eq!(
        stats.analyzed(),
        stats.ok() + stats.mismatch() + stats.errors(),
        "analyzed must equal ok + mismatch + error"
    );
}
