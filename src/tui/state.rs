//! View state and key handling.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use passgen::pass::{self, CharacterClasses, MAX_LENGTH, MIN_LENGTH, Password, PasswordLength};
use passgen::settings::Settings;
use passgen::strength::{self, StrengthLevel};

/// How long the "Copied!" marker stays up.
pub const COPIED_FOR: Duration = Duration::from_secs(2);

/// What the run loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Generate,
    Copy,
    Save,
    PromptLength,
    Quit,
}

/// Everything the view shows. Owned by the run loop, nothing global.
pub struct ViewState {
    pub length: PasswordLength,
    pub classes: CharacterClasses,
    pub password: Option<Password>,
    /// When the password was last copied.
    pub copied_at: Option<Instant>,
    /// Error shown in place of the password.
    pub message: Option<String>,
    pub notice: Option<&'static str>,
}

impl ViewState {
    pub fn new(settings: Settings) -> Self {
        Self {
            length: settings.length.clamped(),
            classes: settings.classes,
            password: None,
            copied_at: None,
            message: None,
            notice: None,
        }
    }

    pub fn strength(&self) -> StrengthLevel {
        strength::classify(&self.classes)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            length: self.length,
            classes: self.classes,
        }
    }

    pub fn set_length(&mut self, len: usize) {
        self.length = PasswordLength::new(len).clamped();
    }

    pub fn toggle(&mut self, index: usize) {
        self.classes.toggle(index);
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Time left on the "Copied!" marker, `None` once it has expired.
    pub fn copied_remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.copied_at?;
        COPIED_FOR
            .checked_sub(now.saturating_duration_since(at))
            .filter(|left| !left.is_zero())
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_remaining(now).is_some()
    }

    /// Replace the password. With no class selected the old one is cleared
    /// and the reason shown instead.
    pub fn generate(&mut self) {
        match pass::generate(self.length, &self.classes) {
            Ok(p) => {
                self.password = Some(p);
                self.message = None;
            }
            Err(e) => {
                self.password = None;
                self.message = Some(e.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Redraw,
            };
        }

        self.message = None;
        self.notice = None;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Char('s') => Action::Save,
            KeyCode::Char('L') => Action::PromptLength,
            KeyCode::Left | KeyCode::Char('-') => {
                self.set_length(self.length.get().saturating_sub(1).max(MIN_LENGTH));
                Action::Redraw
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_length((self.length.get() + 1).min(MAX_LENGTH));
                Action::Redraw
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.toggle(c as usize - '1' as usize);
                Action::Redraw
            }
            _ => Action::Redraw,
        }
    }
}
