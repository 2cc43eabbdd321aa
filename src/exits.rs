//! Exit handling: signal handlers, terminal restore, and exit codes.

use std::process::ExitCode;

use passgen::Error;

/// Bad input: negative length, no classes selected.
pub const USAGE: u8 = 2;
/// Environment failure: settings file, clipboard, I/O.
pub const FAILURE: u8 = 1;

pub fn status_for(err: &Error) -> u8 {
    if err.is_input_error() { USAGE } else { FAILURE }
}

pub fn code_for(err: &Error) -> ExitCode {
    ExitCode::from(status_for(err))
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Escape codes only when stdout is a TTY, never into a pipe
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit restores the terminal
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call early in main(), before touching the terminal.
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_usage() {
        assert_eq!(status_for(&Error::InvalidLength(-4)), USAGE);
        assert_eq!(status_for(&Error::EmptyAlphabet), USAGE);
        assert_eq!(status_for(&Error::Clipboard("no display".into())), FAILURE);
    }
}
