//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::CharacterClasses;
pub use generate::{
    DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, Password, PasswordLength, generate, generate_with,
};
pub use output::SecureBufWriter;
