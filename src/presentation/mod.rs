//! Presentation layer
//!
//! Command line parsing, console output and logging setup.

pub mod cli;
