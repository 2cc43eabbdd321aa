//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and prompts. Passwords and errors still print.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Turn quiet mode on or off for the rest of the process.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled.
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Both ends of a prompt are a terminal: we can ask on stderr and read an answer on stdin.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(2) == 1 }
}

/// True when quiet mode is on or nobody is there to answer.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
