//! Password generation.

use std::fmt;

use log::debug;
use rand::Rng;
use zeroize::Zeroize;

use super::charset::{self, CharacterClasses};
use crate::error::{Error, Result};
use crate::rand::Rand;

/// Shortest length offered by the interactive view.
pub const MIN_LENGTH: usize = 4;
/// Longest length offered by the interactive view.
pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_LENGTH: usize = 12;

/// Requested password length. Any non-negative value is accepted here;
/// the [`MIN_LENGTH`]..=[`MAX_LENGTH`] range is a view concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const fn new(len: usize) -> Self {
        PasswordLength(len)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Clamp into the interactive range.
    pub fn clamped(self) -> Self {
        PasswordLength(self.0.clamp(MIN_LENGTH, MAX_LENGTH))
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(PasswordLength)
            .map_err(|_| Error::InvalidLength(value))
    }
}

impl From<usize> for PasswordLength {
    fn from(len: usize) -> Self {
        PasswordLength(len)
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A generated password. The backing memory is zeroed on drop.
#[derive(PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of characters. The alphabet is ASCII, so this equals the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a password with a freshly seeded [`Rand`].
pub fn generate(length: PasswordLength, classes: &CharacterClasses) -> Result<Password> {
    generate_with(length, classes, &mut Rand::new())
}

/// Generate a password drawing from `rng`.
///
/// Each character is picked independently and uniformly from the alphabet of
/// the selected classes. A zero length yields an empty password whatever the
/// classes; a positive length with no classes is [`Error::EmptyAlphabet`].
pub fn generate_with<R: Rng + ?Sized>(
    length: PasswordLength,
    classes: &CharacterClasses,
    rng: &mut R,
) -> Result<Password> {
    let length = length.get();
    if length == 0 {
        return Ok(Password(String::new()));
    }

    let mut chars = charset::build(classes);
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    debug!(
        "generating {} chars from a {} char alphabet",
        length,
        chars.len()
    );

    let password: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect();
    chars.zeroize();

    Ok(Password(password))
}
