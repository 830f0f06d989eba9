//! Run progress state
//!
//! Process-wide record of where the current run is, readable from a signal
//! handler. Everything is stored in atomics so the driver never takes a lock
//! and the probe never allocates. A probe firing in the middle of
//! [`ProgressState::advance`] may see the index of one candidate with the
//! path of its neighbour; that race is accepted.

use crate::domain::entities::FileCandidate;
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use std::os::unix::ffi::OsStrExt;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// Longest path prefix kept in the state; longer paths are truncated
pub const PATH_CAPACITY: usize = 4096;

const STAMP_CAPACITY: usize = 32;

/// Buffer size that always holds a full probe line
pub const PROBE_LINE_CAPACITY: usize = PATH_CAPACITY + STAMP_CAPACITY + 64;

/// Format of the run start time in probe output
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NO_RUN_MESSAGE: &[u8] = b"no batch run in progress";

/// Lifecycle of the progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No run has started yet
    Idle,
    /// A run is in progress
    Running,
    /// The last run has finished; the stored position is stale
    Finished,
}

impl RunPhase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => RunPhase::Running,
            2 => RunPhase::Finished,
            _ => RunPhase::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            RunPhase::Idle => 0,
            RunPhase::Running => 1,
            RunPhase::Finished => 2,
        }
    }
}

/// Owned copy of the progress of a running run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub started: String,
    pub index: usize,
    pub path: String,
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- nº {} / {}", self.started, self.index, self.path)
    }
}

/// Position of the current run: start time, 1-based index and path of the
/// candidate most recently started
pub struct ProgressState {
    phase: AtomicU8,
    index: AtomicUsize,
    path_len: AtomicUsize,
    path: [AtomicU8; PATH_CAPACITY],
    stamp_len: AtomicUsize,
    stamp: [AtomicU8; STAMP_CAPACITY],
}

/// The state read by the installed progress probe
pub static PROGRESS: ProgressState = ProgressState::new();

impl ProgressState {
    pub const fn new() -> Self {
        Self {
            phase: AtomicU8::new(0),
            index: AtomicUsize::new(0),
            path_len: AtomicUsize::new(0),
            path: [const { AtomicU8::new(0) }; PATH_CAPACITY],
            stamp_len: AtomicUsize::new(0),
            stamp: [const { AtomicU8::new(0) }; STAMP_CAPACITY],
        }
    }

    /// Marks the start of a run
    pub fn begin_run(&self, started: DateTime<Local>) {
        let stamp = started.format(STAMP_FORMAT).to_string();
        let len = store_bytes(&self.stamp, stamp.as_bytes());
        self.stamp_len.store(len, Ordering::Relaxed);
        self.path_len.store(0, Ordering::Relaxed);
        self.index.store(0, Ordering::Release);
        self.phase.store(RunPhase::Running.as_u8(), Ordering::Release);
    }

    /// Records the candidate about to be checked
    pub fn advance(&self, candidate: &FileCandidate) {
        let bytes = candidate.path().as_os_str().as_bytes();
        let len = store_bytes(&self.path, bytes);
        self.path_len.store(len, Ordering::Relaxed);
        self.index.store(candidate.index(), Ordering::Release);
    }

    /// Marks the end of the run
    pub fn finish(&self) {
        self.phase.store(RunPhase::Finished.as_u8(), Ordering::Release);
    }

    pub fn phase(&self) -> RunPhase {
        RunPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Formats the probe line into `buf`, returning the number of bytes
    /// written. The line always ends with `\n` when `buf` is not empty.
    ///
    /// Does not allocate or lock; safe to call from a signal handler.
    pub fn render_into(&self, buf: &mut [u8]) -> usize {
        let mut out = LineWriter::new(buf);

        if self.phase() != RunPhase::Running {
            out.push(NO_RUN_MESSAGE);
            return out.finish();
        }

        let index = self.index.load(Ordering::Acquire);
        let stamp_len = self.stamp_len.load(Ordering::Relaxed).min(STAMP_CAPACITY);
        for byte in &self.stamp[..stamp_len] {
            out.push(&[byte.load(Ordering::Relaxed)]);
        }

        if index == 0 {
            out.push(" -- no file started yet".as_bytes());
            return out.finish();
        }

        out.push(" -- nº ".as_bytes());
        let _ = write!(out, "{index}");
        out.push(b" / ");
        let path_len = self.path_len.load(Ordering::Relaxed).min(PATH_CAPACITY);
        for byte in &self.path[..path_len] {
            out.push(&[byte.load(Ordering::Relaxed)]);
        }
        out.finish()
    }

    /// Returns the probe line as an owned string, without the newline
    pub fn query(&self) -> String {
        let mut buf = vec![0u8; PROBE_LINE_CAPACITY];
        let len = self.render_into(&mut buf);
        String::from_utf8_lossy(&buf[..len])
            .trim_end_matches('\n')
            .to_string()
    }

    /// Copies the current position, if a run is in progress and has started
    /// a candidate
    pub fn snapshot(&self) -> Option<ProgressSnapshot> {
        if self.phase() != RunPhase::Running {
            return None;
        }
        let index = self.index.load(Ordering::Acquire);
        if index == 0 {
            return None;
        }
        let stamp_len = self.stamp_len.load(Ordering::Relaxed).min(STAMP_CAPACITY);
        let path_len = self.path_len.load(Ordering::Relaxed).min(PATH_CAPACITY);
        Some(ProgressSnapshot {
            started: load_string(&self.stamp[..stamp_len]),
            index,
            path: load_string(&self.path[..path_len]),
        })
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

fn store_bytes(slots: &[AtomicU8], bytes: &[u8]) -> usize {
    let len = bytes.len().min(slots.len());
    for (slot, byte) in slots.iter().zip(&bytes[..len]) {
        slot.store(*byte, Ordering::Relaxed);
    }
    len
}

fn load_string(slots: &[AtomicU8]) -> String {
    let bytes: Vec<u8> = slots.iter().map(|b| b.load(Ordering::Relaxed)).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Fixed-buffer writer that truncates instead of failing, keeping one byte
/// for the trailing newline
struct LineWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> LineWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    fn push(&mut self, bytes: &[u8]) {
        let limit = self.buf.len().saturating_sub(1);
        let room = limit.saturating_sub(self.len);
        let take = bytes.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&bytes[..take]);
        self.len += take;
    }

    fn finish(self) -> usize {
        if self.buf.is_empty() {
            return 0;
        }
        self.buf[self.len] = b'\n';
        self.len + 1
    }
}

impl fmt::Write for LineWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s.as_bytes());
        Ok(())
    }
}
