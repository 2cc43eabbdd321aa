use std::collections::HashSet;

use passgen::pass::{self, CharacterClasses, PasswordLength, charset};
use passgen::rand::Rand;
use passgen::strength::{self, StrengthLevel};
use passgen::Error;

fn every_combination() -> impl Iterator<Item = CharacterClasses> {
    (0..16u8).map(|bits| {
        CharacterClasses::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
    })
}

#[test]
fn length_and_membership_for_every_selection() {
    let mut rng = Rand::seeded(2024);
    for classes in every_combination().filter(|c| !c.is_empty()) {
        let alphabet = charset::build(&classes);
        for len in [0, 1, 4, 12, 20, 100] {
            let password = pass::generate_with(PasswordLength::new(len), &classes, &mut rng).unwrap();
            assert_eq!(password.len(), len);
            assert!(password.as_bytes().iter().all(|b| alphabet.contains(b)));
        }
    }
}

#[test]
fn twelve_alphanumeric() {
    let classes = CharacterClasses::new(true, true, true, false);
    let password = pass::generate(PasswordLength::new(12), &classes).unwrap();
    assert_eq!(password.as_str().chars().count(), 12);
    assert!(password.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn zero_length_is_empty_for_every_selection() {
    for classes in every_combination() {
        assert_eq!(pass::generate(PasswordLength::new(0), &classes).unwrap().as_str(), "");
    }
}

#[test]
fn empty_selection_policy() {
    let err = pass::generate(PasswordLength::new(1), &CharacterClasses::none()).unwrap_err();
    assert!(matches!(err, Error::EmptyAlphabet));
    assert!(err.is_input_error());
}

#[test]
fn negative_length_is_rejected() {
    let err = PasswordLength::try_from(-12i64).unwrap_err();
    assert!(matches!(err, Error::InvalidLength(-12)));
}

#[test]
fn thousand_calls_are_distinct() {
    let classes = CharacterClasses::new(true, true, true, false);
    let seen: HashSet<String> = (0..1000)
        .map(|_| {
            pass::generate(PasswordLength::new(12), &classes)
                .unwrap()
                .as_str()
                .to_owned()
        })
        .collect();
    assert_eq!(seen.len(), 1000);
}

#[test]
fn strength_ladder() {
    let mut classes = CharacterClasses::none();
    assert_eq!(strength::classify(&classes), StrengthLevel::TooWeak);

    let expected = [
        StrengthLevel::TooWeak,
        StrengthLevel::Weak,
        StrengthLevel::Medium,
        StrengthLevel::Strong,
    ];
    for (i, level) in expected.into_iter().enumerate() {
        classes.toggle(i);
        assert_eq!(strength::classify(&classes), level);
    }
}

#[test]
fn strength_ignores_which_classes() {
    for a in every_combination() {
        for b in every_combination().filter(|b| b.count() == a.count()) {
            assert_eq!(strength::classify(&a), strength::classify(&b));
        }
    }
}
