//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use passgen::strength::StrengthLevel;

use super::quiet;
use crate::terminal::{GREEN, RED, RESET, YELLOW};

/// Warning on stderr (yellow), suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error on stderr (red), always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation on stderr, suppressed in quiet mode
pub fn note(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("{GREEN}Copied!{RESET}");
        } else {
            eprintln!("{GREEN}Copied {count} passwords!{RESET}");
        }
    }
}

/// Strength and entropy summary for `--verbose`, on stderr so stdout stays pipeable.
pub fn strength_report(level: StrengthLevel, charset: usize, bits: f64) {
    eprintln!("Strength: {level} • Charset: {charset} chars • {bits:.1} bits");
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back to printing without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
