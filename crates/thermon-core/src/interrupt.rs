use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Exit status used when a second interrupt forces the process down.
pub const FORCED_EXIT_CODE: i32 = 130;

/// Installs the Ctrl+C / SIGTERM / SIGHUP handler.
///
/// The first signal cancels `cancel` so the poll loop can finish its tick and
/// return. A second signal exits immediately with [`FORCED_EXIT_CODE`].
///
/// # Errors
/// Returns an error if a handler is already installed or the platform
/// refuses the registration.
pub fn init(cancel: CancellationToken) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            process::exit(FORCED_EXIT_CODE);
        }
        cancel.cancel();
    })
}

/// Checks if a shutdown signal has been received.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
