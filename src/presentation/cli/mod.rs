//! CLI module

mod commands;
mod logging;
mod reporter;

pub use commands::{Cli, OracleArg};
pub use logging::init_logging;
pub use reporter::{verdict_line, ConsoleReporter, Stream};
