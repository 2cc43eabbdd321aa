//! Strength rating.
//!
//! The rating is a count of selected character classes, not an entropy
//! estimate: it ignores length and the generated content. [`entropy_bits`] is
//! kept separate and is for display only.

use std::fmt;

use crate::pass::CharacterClasses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::TooWeak => "Too Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Filled cells on a four-cell meter.
    pub fn bars(self) -> usize {
        match self {
            StrengthLevel::TooWeak => 1,
            StrengthLevel::Weak => 2,
            StrengthLevel::Medium => 3,
            StrengthLevel::Strong => 4,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate the selection: 0 or 1 classes is too weak, 2 weak, 3 medium, 4 strong.
pub fn classify(classes: &CharacterClasses) -> StrengthLevel {
    match classes.count() {
        0 | 1 => StrengthLevel::TooWeak,
        2 => StrengthLevel::Weak,
        3 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    }
}

/// Password entropy in bits for a uniform draw.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bits(bits: u8) -> CharacterClasses {
        CharacterClasses::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
    }

    #[test]
    fn nothing_selected_is_too_weak() {
        assert_eq!(classify(&CharacterClasses::none()), StrengthLevel::TooWeak);
    }

    #[test]
    fn adding_classes_raises_level() {
        let mut classes = CharacterClasses::new(true, false, false, false);
        assert_eq!(classify(&classes), StrengthLevel::TooWeak);
        classes.uppercase = true;
        assert_eq!(classify(&classes), StrengthLevel::Weak);
        classes.numbers = true;
        assert_eq!(classify(&classes), StrengthLevel::Medium);
        classes.symbols = true;
        assert_eq!(classify(&classes), StrengthLevel::Strong);
    }

    #[test]
    fn depends_only_on_count() {
        for a in 0..16u8 {
            for b in 0..16u8 {
                if a.count_ones() == b.count_ones() {
                    assert_eq!(classify(&from_bits(a)), classify(&from_bits(b)));
                }
            }
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(StrengthLevel::TooWeak < StrengthLevel::Weak);
        assert!(StrengthLevel::Weak < StrengthLevel::Medium);
        assert!(StrengthLevel::Medium < StrengthLevel::Strong);
    }

    #[test]
    fn labels() {
        assert_eq!(StrengthLevel::TooWeak.to_string(), "Too Weak");
        assert_eq!(StrengthLevel::Strong.to_string(), "Strong");
    }

    #[test]
    fn entropy() {
        assert_eq!(entropy_bits(12, 0), 0.0);
        assert_eq!(entropy_bits(0, 62), 0.0);
        assert!((entropy_bits(10, 2) - 10.0).abs() < 1e-9);
        assert!((entropy_bits(12, 64) - 72.0).abs() < 1e-9);
    }
}
