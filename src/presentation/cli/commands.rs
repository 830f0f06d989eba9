//! CLI commands using clap

use crate::application::dto::{CheckMode, CheckOptions, OracleKind};
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// checkFile - extension versus content checker
///
/// Verifies that each file's extension matches the type found in its magic
/// bytes. Send SIGUSR1 during a batch run to print the current position.
#[derive(Parser, Debug)]
#[command(name = "checkfile")]
#[command(version, about = "Check that file extensions match their content type", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["file", "batch", "dir"])))]
pub struct Cli {
    /// File to check
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Text file listing the paths to check, one per line
    #[arg(short, long, value_name = "LIST")]
    pub batch: Option<PathBuf>,

    /// Directory whose entries are checked (not recursive)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// How content types are detected
    #[arg(long, value_enum, default_value_t = OracleArg::File)]
    pub oracle: OracleArg,

    /// Program run by the `file` oracle
    #[arg(long, value_name = "PROGRAM", default_value = "file")]
    pub file_command: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Oracle choices on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleArg {
    /// Run `file --mime-type -b` per file
    File,
    /// Match magic bytes in-process
    Builtin,
}

impl From<OracleArg> for OracleKind {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::File => OracleKind::FileCommand,
            OracleArg::Builtin => OracleKind::Builtin,
        }
    }
}

impl Cli {
    /// Converts the parsed arguments into check options.
    ///
    /// Returns `None` if no mode was given, which clap already rejects.
    pub fn into_options(self) -> Option<CheckOptions> {
        let mode = if let Some(path) = self.file {
            CheckMode::File(path)
        } else if let Some(list) = self.batch {
            CheckMode::Batch(list)
        } else if let Some(dir) = self.dir {
            CheckMode::Directory(dir)
        } else {
            return None;
        };

        Some(
            CheckOptions::new(mode)
                .with_oracle(self.oracle.into())
                .with_file_command(self.file_command.into_os_string()),
        )
    }
}
