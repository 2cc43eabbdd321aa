//! Terminal output utilities.
//!
//! Box drawing, meters, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

pub fn show_cursor() {
    print!("\x1b[?25h");
    flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing (48 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 48;

/// Box top with optional title: ┌─ Title ───────┐
pub fn format_box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line, left aligned: │ content     │
pub fn format_box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Box content line, centered: │   content   │
pub fn format_box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

pub fn format_box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

pub fn box_top(title: &str) {
    println!("{}", format_box_top(title));
}

pub fn box_line(content: &str) {
    println!("{}", format_box_line(content));
}

pub fn box_line_center(content: &str) {
    println!("{}", format_box_line_center(content));
}

pub fn box_bottom() {
    println!("{}", format_box_bottom());
}

/// Key and description in two columns.
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 14;
    let key_padded = if key.chars().count() < key_col {
        format!("{}{}", key, " ".repeat(key_col - key.chars().count()))
    } else {
        key.to_string()
    };
    box_line(&format!("{}{}", key_padded, desc));
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Meters
// ============================================================================

/// Horizontal slider: position of `value` within `min..=max` over `width` cells.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let pos = value.clamp(min, max) - min;
    let filled = (pos * width) / span;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '━' } else { '─' });
    }
    bar.push('●');
    bar
}

/// Segmented meter, `filled` of `cells` lit.
pub fn cells(filled: usize, cells: usize, color: &str) -> String {
    let mut out = String::new();
    for i in 0..cells {
        if i > 0 {
            out.push(' ');
        }
        if i < filled {
            out.push_str(&format!("{color}▮▮▮{RESET}"));
        } else {
            out.push_str(&format!("{DIM}▯▯▯{RESET}"));
        }
    }
    out
}
