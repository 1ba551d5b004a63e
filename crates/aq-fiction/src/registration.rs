//! Registration form and field validators.

use std::fmt;

use tracing::debug;

use crate::error::{FictionError, FictionResult, NameRule};

/// Minimum name length, counted in characters after trimming.
pub const MIN_NAME_LEN: usize = 2;
/// Youngest age allowed to play.
pub const MIN_AGE: u32 = 8;
/// Largest age accepted as a valid age at all.
pub const MAX_AGE: u32 = 150;

/// Validate a player name.
///
/// Only ASCII letters and whitespace are allowed, and at least
/// [`MIN_NAME_LEN`] characters must remain after trimming. Returns the
/// trimmed name; case is left alone.
pub fn validate_name(input: &str) -> FictionResult<String> {
    let name = input.trim();

    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(FictionError::InvalidName(NameRule::LettersOnly));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(FictionError::InvalidName(NameRule::TooShort));
    }

    Ok(name.to_string())
}

/// Validate a player age.
///
/// The input must be a base-10 integer in `0..=150`; anything else is
/// [`FictionError::InvalidAge`]. Valid ages below [`MIN_AGE`] are
/// [`FictionError::AgeTooLow`].
pub fn validate_age(input: &str) -> FictionResult<u32> {
    let age: i64 = input
        .trim()
        .parse()
        .map_err(|_| FictionError::InvalidAge)?;

    let age = u32::try_from(age)
        .ok()
        .filter(|a| *a <= MAX_AGE)
        .ok_or(FictionError::InvalidAge)?;

    if age < MIN_AGE {
        return Err(FictionError::AgeTooLow);
    }

    Ok(age)
}

/// A registered player. Only obtainable through [`Registration::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    age: u32,
}

impl Player {
    /// The validated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated age.
    pub fn age(&self) -> u32 {
        self.age
    }
}

/// Raw registration input as typed by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Name field contents.
    pub name: String,
    /// Age field contents.
    pub age: String,
}

impl Registration {
    /// Create a form with the given raw inputs.
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// A form pre-filled from an existing player.
    pub fn from_player(player: &Player) -> Self {
        Self::new(player.name(), player.age().to_string())
    }

    /// Run both validators.
    ///
    /// The form itself is left untouched, so after a rejection the player can
    /// fix the failing field without retyping the other one.
    pub fn submit(&self) -> Result<Player, RegistrationErrors> {
        match (validate_name(&self.name), validate_age(&self.age)) {
            (Ok(name), Ok(age)) => Ok(Player { name, age }),
            (name, age) => {
                let errors = RegistrationErrors {
                    name: name.err(),
                    age: age.err(),
                };
                debug!(%errors, "registration rejected");
                Err(errors)
            }
        }
    }
}

/// Per-field errors from a rejected registration.
#[derive(Debug, Default)]
pub struct RegistrationErrors {
    /// Error for the name field, if it failed.
    pub name: Option<FictionError>,
    /// Error for the age field, if it failed.
    pub age: Option<FictionError>,
}

impl RegistrationErrors {
    /// Messages for the failing fields, name first.
    pub fn messages(&self) -> Vec<String> {
        [&self.name, &self.age]
            .into_iter()
            .flatten()
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for RegistrationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

impl std::error::Error for RegistrationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_is_trimmed_not_recased() {
        assert_eq!(validate_name("  ada Lovelace ").unwrap(), "ada Lovelace");
    }

    #[test]
    fn name_rules() {
        assert!(matches!(
            validate_name("R2D2"),
            Err(FictionError::InvalidName(NameRule::LettersOnly))
        ));
        assert!(matches!(
            validate_name("A"),
            Err(FictionError::InvalidName(NameRule::TooShort))
        ));
        assert!(matches!(
            validate_name("   "),
            Err(FictionError::InvalidName(NameRule::TooShort))
        ));
        assert!(matches!(
            validate_name("José"),
            Err(FictionError::InvalidName(NameRule::LettersOnly))
        ));
    }

    #[test]
    fn age_examples() {
        assert!(matches!(validate_age("7"), Err(FictionError::AgeTooLow)));
        assert!(matches!(validate_age("0"), Err(FictionError::AgeTooLow)));
        assert_eq!(validate_age("8").unwrap(), 8);
        assert_eq!(validate_age("150").unwrap(), 150);
        assert_eq!(validate_age(" 42 ").unwrap(), 42);
        for bad in ["151", "-1", "abc", "12.5", "", "99999999999999999999"] {
            assert!(
                matches!(validate_age(bad), Err(FictionError::InvalidAge)),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FictionError::AgeTooLow.to_string(),
            "Sorry, you must be at least 8 years old to play this game!"
        );
        assert_eq!(
            FictionError::InvalidName(NameRule::TooShort).to_string(),
            "Please enter a name with at least 2 characters!"
        );
    }

    #[test]
    fn submit_accepts_valid_form() {
        let player = Registration::new("Guru", "30").submit().unwrap();
        assert_eq!(player.name(), "Guru");
        assert_eq!(player.age(), 30);
    }

    #[test]
    fn submit_reports_only_failing_field() {
        let form = Registration::new("Guru", "5");
        let errors = form.submit().unwrap_err();
        assert!(errors.name.is_none());
        assert!(matches!(errors.age, Some(FictionError::AgeTooLow)));
        // The valid name stays in the form.
        assert_eq!(form.name, "Guru");

        let errors = Registration::new("42", "30").submit().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.age.is_none());
    }

    #[test]
    fn submit_reports_both_fields() {
        let errors = Registration::new("", "abc").submit().unwrap_err();
        assert_eq!(
            errors.messages(),
            vec![
                "Please enter a name with at least 2 characters!".to_string(),
                "Please enter a valid age between 0 and 150!".to_string(),
            ]
        );
    }

    #[test]
    fn prefill_from_player() {
        let player = Registration::new(" Mira ", "12").submit().unwrap();
        assert_eq!(Registration::from_player(&player), Registration::new("Mira", "12"));
    }

    fn forbidden_char() -> impl Strategy<Value = char> {
        prop::sample::select(vec![
            '0', '1', '5', '9', '!', '@', '#', '$', '%', '-', '_', '.', '\'', '😀', '🐉', 'é',
        ])
    }

    proptest! {
        #[test]
        fn names_with_forbidden_chars_fail(
            prefix in "[a-zA-Z ]{0,8}",
            bad in forbidden_char(),
            suffix in "[a-zA-Z ]{0,8}",
        ) {
            let input = format!("{prefix}{bad}{suffix}");
            prop_assert!(matches!(validate_name(&input), Err(FictionError::InvalidName(_))));
        }

        #[test]
        fn short_names_fail(pad_l in " {0,3}", letter in "[a-zA-Z]?", pad_r in "[ \t]{0,3}") {
            let input = format!("{pad_l}{letter}{pad_r}");
            prop_assert!(matches!(
                validate_name(&input),
                Err(FictionError::InvalidName(NameRule::TooShort))
            ));
        }

        #[test]
        fn letter_names_pass(name in "[a-zA-Z]{2,10}( [a-zA-Z]{1,10})?", pad in " {0,2}") {
            let input = format!("{pad}{name}{pad}");
            prop_assert_eq!(validate_name(&input).unwrap(), name);
        }

        #[test]
        fn playable_ages_pass(age in MIN_AGE..=MAX_AGE) {
            prop_assert_eq!(validate_age(&age.to_string()).unwrap(), age);
        }

        #[test]
        fn young_ages_too_low(age in 0..MIN_AGE) {
            prop_assert!(matches!(validate_age(&age.to_string()), Err(FictionError::AgeTooLow)));
        }

        #[test]
        fn out_of_range_ages_invalid(age in prop_oneof![i64::MIN..0, 151..i64::MAX]) {
            prop_assert!(matches!(validate_age(&age.to_string()), Err(FictionError::InvalidAge)));
        }
    }
}
