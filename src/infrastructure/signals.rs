//! Progress probe signal handler
//!
//! Installs a `SIGUSR1` handler that prints the current run position from
//! [`PROGRESS`] without disturbing the run.

use crate::application::progress::{PROBE_LINE_CAPACITY, PROGRESS};
use std::io;
use thiserror::Error;

/// Signal that triggers the progress probe
pub const PROBE_SIGNAL: libc::c_int = libc::SIGUSR1;

/// Errors that can occur while installing the probe
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("cannot install handler for signal {signal}: {source}")]
    Install {
        signal: libc::c_int,
        #[source]
        source: io::Error,
    },
}

/// Formats into a stack buffer and emits it with a single `write(2)`.
/// Only async-signal-safe operations happen here.
extern "C" fn on_probe_signal(_signal: libc::c_int) {
    let saved_errno = io::Error::last_os_error().raw_os_error();
    let mut line = [0u8; PROBE_LINE_CAPACITY];
    let len = PROGRESS.render_into(&mut line);
    // SAFETY: `line` is a live stack buffer and `len <= line.len()`.
    unsafe {
        libc::write(libc::STDOUT_FILENO, line.as_ptr().cast(), len);
    }
    #[cfg(target_os = "linux")]
    if let Some(errno) = saved_errno {
        // SAFETY: restores the errno of the interrupted code on this thread.
        unsafe {
            *libc::__errno_location() = errno;
        }
    }
    #[cfg(not(target_os = "linux"))]
    let _ = saved_errno;
}

/// Installs the progress probe on [`PROBE_SIGNAL`].
///
/// Uses `SA_RESTART` so system calls in the driver resume after the probe.
pub fn install_progress_probe() -> Result<(), SignalError> {
    // SAFETY: a zeroed `sigaction` is a valid starting value; the mask is
    // initialised with `sigemptyset` before use.
    let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
    action.sa_sigaction = on_probe_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
    action.sa_flags = libc::SA_RESTART;

    // SAFETY: `action` is fully initialised and outlives both calls.
    let rc = unsafe {
        libc::sigemptyset(&mut action.sa_mask);
        libc::sigaction(PROBE_SIGNAL, &action, std::ptr::null_mut())
    };
    if rc != 0 {
        return Err(SignalError::Install {
            signal: PROBE_SIGNAL,
            source: io::Error::last_os_error(),
        });
    }

    tracing::debug!(
        "progress probe installed: send signal {} to pid {}",
        PROBE_SIGNAL,
        rustix::process::getpid().as_raw_nonzero()
    );
    Ok(())
}
