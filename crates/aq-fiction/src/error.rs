//! Error types for the session engine.

use std::fmt;

use aq_core::StoryError;
use thiserror::Error;

/// Result type for session operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while registering or playing.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The name contains forbidden characters or is too short.
    #[error("{0}")]
    InvalidName(NameRule),

    /// The age is not a whole number between 0 and 150.
    #[error("Please enter a valid age between 0 and 150!")]
    InvalidAge,

    /// The age is valid but below the minimum playing age.
    #[error("Sorry, you must be at least 8 years old to play this game!")]
    AgeTooLow,

    /// Choice index out of range for the current scene.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// No choice of the current scene matches the input.
    #[error("no choice matches \"{0}\"")]
    ChoiceNotFound(String),

    /// Scene graph error.
    #[error(transparent)]
    Story(#[from] StoryError),
}

/// Which naming rule a rejected name broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Only letters A-Z and whitespace are allowed.
    LettersOnly,
    /// At least two characters after trimming.
    TooShort,
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LettersOnly => f.write_str("Please use only letters (A-Z) in your name!"),
            Self::TooShort => f.write_str("Please enter a name with at least 2 characters!"),
        }
    }
}
