//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories plus the
//! platform-specific pieces: file system checks and signal handling.

pub mod filesystem;
pub mod oracles;
pub mod signals;
