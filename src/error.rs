//! Error type shared by the library and the binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid length: {0} (must be zero or greater)")]
    InvalidLength(i64),

    #[error("No character classes selected")]
    EmptyAlphabet,

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by what the user asked for, as opposed to the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidLength(_) | Error::EmptyAlphabet)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
