//! File candidate entity

use std::fmt;
use std::path::{Path, PathBuf};

/// A path about to be checked, together with its position in the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// 1-based position among the candidates of the run
    index: usize,
    path: PathBuf,
}

impl FileCandidate {
    pub fn new(index: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            index,
            path: path.into(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lossy string form, used for extension extraction and output
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl fmt::Display for FileCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
