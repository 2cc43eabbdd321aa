use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};

use crate::terminal::{RawModeGuard, flush, hide_cursor, show_cursor};

pub enum Input {
    Key(KeyEvent),
    /// The timeout passed with no key.
    Timeout,
}

/// Wait for the next key press, at most `timeout` when one is given.
/// `None` when the terminal cannot be read.
pub fn read_key(timeout: Option<Duration>) -> Option<Input> {
    let _guard = RawModeGuard::new().ok()?;
    let deadline = timeout.map(|t| Instant::now() + t);

    loop {
        if let Some(deadline) = deadline {
            let left = deadline.saturating_duration_since(Instant::now());
            match poll(left) {
                Ok(true) => {}
                Ok(false) => return Some(Input::Timeout),
                Err(_) => return None,
            }
        }

        match read() {
            // Windows reports releases too
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                return Some(Input::Key(key));
            }
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
}

/// Read a length with live redraw. `None` on Esc or Ctrl+Q, the current
/// value on Enter with nothing typed.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = String::new();
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value),
    };

    show_cursor();
    print!("{} [{}]: ", prompt, initial_value);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
                match key_event.code {
                    KeyCode::Char('c') | KeyCode::Char('q')
                        if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        digits.clear();
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        digits.pop();
                    }
                    // Lengths are at most two digits
                    KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 2 => {
                        digits.push(c);
                    }
                    _ => {}
                }

                print!("\r\x1b[2K{} [{}]: {}", prompt, initial_value, digits);
                flush();
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }

    drop(_guard);
    hide_cursor();
    println!();

    if cancelled {
        None
    } else if digits.is_empty() {
        Some(initial_value)
    } else {
        digits.parse().ok()
    }
}
