//! Interactive view.

mod input;
mod state;
mod view;

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use log::{debug, warn};

use passgen::pass::output;
use passgen::settings::Settings;

use crate::exits;
use crate::terminal::{clear, hide_cursor, reset_terminal, show_cursor};

use input::Input;
use state::{Action, ViewState};

/// Run the view until the user quits.
pub fn run(config_path: &Path) -> ExitCode {
    exits::reset_terminal();
    reset_terminal();

    let settings = Settings::load(config_path).unwrap_or_else(|e| {
        warn!("failed to load settings from {}: {}", config_path.display(), e);
        Settings::default()
    });

    let mut state = ViewState::new(settings);
    state.generate();
    hide_cursor();

    loop {
        let now = Instant::now();
        view::render(&state, now);

        // Wake up to take the copied marker down.
        let key = match input::read_key(state.copied_remaining(now)) {
            Some(Input::Key(key)) => key,
            Some(Input::Timeout) => continue,
            None => break,
        };

        match state.handle_key(key) {
            Action::Quit => break,
            Action::Redraw => {}
            Action::Generate => state.generate(),
            Action::Copy => copy(&mut state),
            Action::Save => match state.settings().save(config_path) {
                Ok(()) => state.notice = Some("Saved as defaults"),
                Err(e) => state.message = Some(e.to_string()),
            },
            Action::PromptLength => {
                if let Some(len) = input::get_numeric_input("Length", state.length.get()) {
                    state.set_length(len);
                }
            }
        }
    }

    show_cursor();
    reset_terminal();
    clear();
    ExitCode::SUCCESS
}

fn copy(state: &mut ViewState) {
    let Some(password) = state.password.as_ref() else {
        debug!("nothing to copy");
        return;
    };
    match output::copy_to_clipboard(std::slice::from_ref(password)) {
        Ok(()) => state.mark_copied(Instant::now()),
        Err(e) => state.message = Some(e.to_string()),
    }
}
