//! Check options DTO

use std::ffi::OsString;
use std::path::PathBuf;

/// What to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMode {
    /// A single file
    File(PathBuf),
    /// Every path listed in a text file
    Batch(PathBuf),
    /// Every direct entry of a directory
    Directory(PathBuf),
}

/// Which content-type oracle to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleKind {
    /// The external `file` command
    #[default]
    FileCommand,
    /// In-process magic-byte matching
    Builtin,
}

/// Options for a checkFile invocation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub mode: CheckMode,
    pub oracle: OracleKind,
    /// Program run by the file-command oracle
    pub file_command: OsString,
}

impl CheckOptions {
    /// Creates options for the given mode with the default oracle
    pub fn new(mode: CheckMode) -> Self {
        Self {
            mode,
            oracle: OracleKind::default(),
            file_command: OsString::from("file"),
        }
    }

    /// Selects the oracle
    pub fn with_oracle(mut self, oracle: OracleKind) -> Self {
        self.oracle = oracle;
        self
    }

    /// Overrides the program used by the file-command oracle
    pub fn with_file_command(mut self, program: impl Into<OsString>) -> Self {
        self.file_command = program.into();
        self
    }

    /// Whether this run tracks progress and prints a summary
    pub fn is_run(&self) -> bool {
        !matches!(self.mode, CheckMode::File(_))
    }
}
