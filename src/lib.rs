//! Password generation from selectable character classes, with a
//! class-count strength rating.
//!
//! ```no_run
//! use passgen::pass::{self, CharacterClasses, PasswordLength};
//! use passgen::strength;
//!
//! let classes = CharacterClasses::new(true, true, true, false);
//! let password = pass::generate(PasswordLength::new(12), &classes)?;
//! println!("{} ({})", password.as_str(), strength::classify(&classes));
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod strength;

pub use error::{Error, Result};
