//! Settings file persistence.
//!
//! One line: `length,lowercase,uppercase,numbers,symbols`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::Settings;
use crate::error::{Error, Result};
use crate::pass::{CharacterClasses, PasswordLength};

const PATH_ENV: &str = "PASSGEN_CONFIG";

/// `$PASSGEN_CONFIG`, else `$HOME/.config/passgen/settings`.
pub fn path() -> PathBuf {
    if let Some(p) = env::var_os(PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgen/settings", home))
}

pub fn load(path: &Path) -> Result<Option<Settings>> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no settings file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Ok(None);
    }
    parse_line(line.trim()).map(Some)
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(to_line(settings).as_bytes())?;
    Ok(())
}

pub fn remove(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn to_line(settings: &Settings) -> String {
    let c = settings.classes;
    format!(
        "{},{},{},{},{}\n",
        settings.length, c.lowercase, c.uppercase, c.numbers, c.symbols
    )
}

fn parse_line(line: &str) -> Result<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 5 {
        return Err(Error::Settings(format!(
            "expected 5 fields, found {}",
            parts.len()
        )));
    }

    let length: usize = parts[0]
        .parse()
        .map_err(|_| Error::Settings(format!("bad length: {}", parts[0])))?;

    let flag = |s: &str| -> Result<bool> {
        s.parse()
            .map_err(|_| Error::Settings(format!("bad flag: {}", s)))
    };

    Ok(Settings {
        length: PasswordLength::new(length),
        classes: CharacterClasses::new(
            flag(parts[1])?,
            flag(parts[2])?,
            flag(parts[3])?,
            flag(parts[4])?,
        ),
    })
}
