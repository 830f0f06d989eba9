//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,checkfile=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
