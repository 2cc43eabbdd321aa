//! Character classes and alphabet building.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+~|}{[]:;?><,./-=";

/// The four class toggles. All false is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub const fn new(lowercase: bool, uppercase: bool, numbers: bool, symbols: bool) -> Self {
        Self {
            lowercase,
            uppercase,
            numbers,
            symbols,
        }
    }

    pub const fn all() -> Self {
        Self::new(true, true, true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    /// Number of selected classes, 0 to 4.
    pub fn count(&self) -> usize {
        self.flags().iter().filter(|&&on| on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn flags(&self) -> [bool; 4] {
        [self.lowercase, self.uppercase, self.numbers, self.symbols]
    }

    /// Flip one class by position (0 lowercase .. 3 symbols). Out of range is ignored.
    pub fn toggle(&mut self, index: usize) {
        match index {
            0 => self.lowercase = !self.lowercase,
            1 => self.uppercase = !self.uppercase,
            2 => self.numbers = !self.numbers,
            3 => self.symbols = !self.symbols,
            _ => {}
        }
    }
}

/// Build the alphabet: lowercase, uppercase, numbers, symbols, in that order.
pub fn build(classes: &CharacterClasses) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));

    if classes.lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if classes.uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if classes.numbers {
        chars.extend_from_slice(DIGITS);
    }
    if classes.symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Alphabet size without building it.
pub fn size(classes: &CharacterClasses) -> usize {
    let mut size = 0;
    if classes.lowercase {
        size += LOWERCASE.len();
    }
    if classes.uppercase {
        size += UPPERCASE.len();
    }
    if classes.numbers {
        size += DIGITS.len();
    }
    if classes.symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sets_have_expected_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 28);
    }

    #[test]
    fn alphabet_follows_fixed_order() {
        let chars = build(&CharacterClasses::new(true, false, true, true));
        assert_eq!(chars.len(), 26 + 10 + 28);
        assert_eq!(&chars[..26], LOWERCASE);
        assert_eq!(&chars[26..36], DIGITS);
        assert_eq!(&chars[36..], SYMBOLS);
    }

    #[test]
    fn full_alphabet() {
        let chars = build(&CharacterClasses::all());
        assert_eq!(chars.len(), 90);
        assert_eq!(size(&CharacterClasses::all()), 90);
        assert_eq!(chars[0], b'a');
        assert_eq!(chars[26], b'A');
        assert_eq!(chars[52], b'0');
        assert_eq!(chars[62], b'!');
    }

    #[test]
    fn no_classes_is_empty() {
        let none = CharacterClasses::none();
        assert!(build(&none).is_empty());
        assert_eq!(size(&none), 0);
        assert!(none.is_empty());
    }

    #[test]
    fn size_matches_build_for_every_combination() {
        for bits in 0..16u8 {
            let classes = CharacterClasses::new(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            );
            assert_eq!(build(&classes).len(), size(&classes));
            assert_eq!(classes.count(), bits.count_ones() as usize);
        }
    }

    #[test]
    fn toggle_flips_one_class() {
        let mut classes = CharacterClasses::none();
        classes.toggle(2);
        assert_eq!(classes, CharacterClasses::new(false, false, true, false));
        classes.toggle(2);
        classes.toggle(9);
        assert_eq!(classes, CharacterClasses::none());
    }
}
