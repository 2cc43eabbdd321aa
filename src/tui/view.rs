//! Rendering of the single interactive view.

use std::time::Instant;

use passgen::pass::{MAX_LENGTH, MIN_LENGTH, charset};
use passgen::rand::entropy_source;
use passgen::strength::{StrengthLevel, entropy_bits};

use super::state::ViewState;
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt,
    box_top, cells, clear, flush, slider,
};

const CLASS_LABELS: [&str; 4] = [
    "Lowercase (a-z)",
    "Uppercase (A-Z)",
    "Numbers (0-9)",
    "Symbols (!@#$...)",
];

fn strength_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::TooWeak => RED,
        StrengthLevel::Weak | StrengthLevel::Medium => YELLOW,
        StrengthLevel::Strong => GREEN,
    }
}

pub fn render(state: &ViewState, now: Instant) {
    clear();

    box_top("Password Generator");
    box_line("");
    match (&state.password, &state.message) {
        (_, Some(msg)) => box_line_center(&format!("{RED}{msg}{RESET}")),
        (Some(p), None) => box_line_center(&format!("{BOLD}{}{RESET}", p.as_str())),
        (None, None) => box_line_center(&format!("{DIM}press Enter to generate{RESET}")),
    }
    match (state.is_copied(now), state.notice) {
        (true, _) => box_line_center(&format!("{GREEN}Copied!{RESET}")),
        (false, Some(notice)) => box_line_center(&format!("{GREEN}{notice}{RESET}")),
        (false, None) => box_line(""),
    }
    box_bottom();

    let len = state.length.get();
    box_top("Length");
    box_line(&format!(
        "{len:>2}  {}  {DIM}{MIN_LENGTH}-{MAX_LENGTH}{RESET}",
        slider(len, MIN_LENGTH, MAX_LENGTH, 30)
    ));
    box_bottom();

    box_top("Characters");
    for (i, (on, label)) in state.classes.flags().iter().zip(CLASS_LABELS).enumerate() {
        let mark = if *on { format!("{GREEN}[x]{RESET}") } else { "[ ]".to_string() };
        box_line(&format!("{mark} {}) {label}", i + 1));
    }
    box_bottom();

    let level = state.strength();
    let color = strength_color(level);
    let size = charset::size(&state.classes);
    box_top("Strength");
    box_line(&format!(
        "{color}{:<10}{RESET}{}",
        level.label(),
        cells(level.bars(), 4, color)
    ));
    box_line(&format!(
        "{DIM}{size} chars • {:.1} bits • seed: {}{RESET}",
        entropy_bits(len, size),
        entropy_source()
    ));
    box_bottom();

    box_top("Keys");
    box_opt("Enter / g", "Generate");
    box_opt("← → / - +", "Length");
    box_opt("L", "Type a length");
    box_opt("1-4", "Toggle character class");
    box_opt("c", "Copy to clipboard");
    box_opt("s", "Save as defaults");
    box_opt("Esc / q", "Quit");
    box_bottom();

    flush();
}
