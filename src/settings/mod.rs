//! Default generation settings.

mod file;

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::pass::{CharacterClasses, DEFAULT_LENGTH, PasswordLength};

pub use file::path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: PasswordLength,
    pub classes: CharacterClasses,
}

impl Settings {
    /// Load saved defaults from `path`. A missing or empty file gives [`Settings::default`].
    pub fn load(path: &Path) -> Result<Self> {
        Ok(file::load(path)?.unwrap_or_default())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        file::save(self, path)?;
        info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Forget saved defaults.
    pub fn reset(path: &Path) -> Result<()> {
        file::remove(path)?;
        info!("removed settings at {}", path.display());
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: PasswordLength::new(DEFAULT_LENGTH),
            classes: CharacterClasses::new(true, true, true, false),
        }
    }
}
