//! External `file` command oracle
//!
//! Runs `file --mime-type -b -- <path>` for each candidate and reads the
//! MIME type from its standard output.

use crate::domain::entities::DetectionResult;
use crate::domain::repositories::{ContentTypeOracle, DetectionError};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Oracle backed by an external program
///
/// The program receives its leading arguments followed by the candidate
/// path and must print one `type/subtype` line.
#[derive(Debug, Clone)]
pub struct FileCommandOracle {
    program: OsString,
    args: Vec<OsString>,
}

impl FileCommandOracle {
    /// Creates an oracle running `program --mime-type -b -- <path>`
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: ["--mime-type", "-b", "--"].map(OsString::from).to_vec(),
        }
    }

    /// Replaces the arguments placed before the path
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Default for FileCommandOracle {
    fn default() -> Self {
        Self::new("file")
    }
}

impl ContentTypeOracle for FileCommandOracle {
    fn detect(&self, path: &Path) -> Result<DetectionResult, DetectionError> {
        // Output is captured through a pipe owned by `output()`; it is closed
        // on every return path, including spawn failure.
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| DetectionError::Launch {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            return Err(DetectionError::Failed {
                program: self.program_name(),
                status: output.status,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            return Err(DetectionError::NoOutput {
                program: self.program_name(),
            });
        }

        Ok(DetectionResult::from_mime_line(line))
    }

    fn name(&self) -> &'static str {
        "file command"
    }

    fn ensure_available(&self) -> Result<(), DetectionError> {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|_| ())
            .map_err(|source| DetectionError::Launch {
                program: self.program_name(),
                source,
            })
    }
}
