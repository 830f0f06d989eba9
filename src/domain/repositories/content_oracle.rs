//! Content-type oracle trait
//!
//! Defines the interface for inspecting a file's bytes and naming its
//! content type. Keeps the classifier independent of how detection is
//! actually performed.

use crate::domain::entities::DetectionResult;
use std::io;
use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while detecting a content type
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("cannot launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' terminated abnormally ({status})")]
    Failed { program: String, status: ExitStatus },

    #[error("'{program}' produced no output")]
    NoOutput { program: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Trait for content-type detection
///
/// Implementations receive paths that have already been checked to exist,
/// be readable and be regular files.
///
/// # Example
///
/// ```ignore
/// let oracle = FileCommandOracle::default();
/// oracle.ensure_available()?;
/// match oracle.detect(Path::new("photo.jpg"))? {
///     DetectionResult::Mime(mime) => println!("{mime}"),
///     DetectionResult::Empty => println!("empty"),
/// }
/// ```
pub trait ContentTypeOracle {
    /// Detects the content type of a single file
    fn detect(&self, path: &Path) -> Result<DetectionResult, DetectionError>;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Verifies the oracle can work at all before a run starts
    fn ensure_available(&self) -> Result<(), DetectionError> {
        Ok(())
    }
}
