//! File system access
//!
//! Candidate open checks and top-level directory enumeration.

use crate::core::CandidateError;
use rustix::fs::{access, Access};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Entries read from a directory, plus the error that cut enumeration
/// short, if any
#[derive(Debug)]
pub struct DirectoryListing {
    /// Full candidate paths, sorted by file name
    pub entries: Vec<PathBuf>,
    pub error: Option<io::Error>,
}

/// Verifies that `path` exists, is readable and is a regular file.
///
/// Symlinks are followed.
pub fn check_candidate(path: &Path) -> Result<(), CandidateError> {
    access(path, Access::EXISTS).map_err(|e| CandidateError::unreadable(&io::Error::from(e)))?;
    access(path, Access::READ_OK).map_err(|e| CandidateError::unreadable(&io::Error::from(e)))?;

    let metadata = fs::metadata(path).map_err(|e| CandidateError::unreadable(&e))?;
    if !metadata.is_file() {
        return Err(CandidateError::Irregular);
    }
    Ok(())
}

/// Appends a trailing `/` to a directory path if it lacks one
pub fn normalize_dir(dir: &Path) -> PathBuf {
    if dir.as_os_str().as_bytes().ends_with(b"/") {
        return dir.to_path_buf();
    }
    let mut normalized = dir.as_os_str().to_os_string();
    normalized.push("/");
    PathBuf::from(normalized)
}

/// Lists the direct entries of `dir`.
///
/// Fails only if the directory cannot be opened. A read error during
/// enumeration stops it and is returned in the listing alongside the
/// entries collected before it.
pub fn list_directory(dir: &Path) -> io::Result<DirectoryListing> {
    let prefix = normalize_dir(dir);
    let mut names: Vec<OsString> = Vec::new();
    let mut error = None;

    for entry in fs::read_dir(&prefix)? {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(e) => {
                error = Some(e);
                break;
            }
        }
    }
    names.sort();

    let entries = names
        .into_iter()
        .map(|name| {
            let mut path = prefix.as_os_str().to_os_string();
            path.push(name);
            PathBuf::from(path)
        })
        .collect();

    Ok(DirectoryListing { entries, error })
}
