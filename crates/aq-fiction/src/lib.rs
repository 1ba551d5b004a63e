//! Session engine for Adventure Quest.
//!
//! Turns two free-text registration fields into a validated [`Player`] and
//! drives a [`Session`] through the scene graph from `aq-core`: applying
//! choices, recording history, and resetting.

/// Error types for the session engine.
pub mod error;
/// Choice history records.
pub mod history;
/// Registration form and field validators.
pub mod registration;
/// Matching player input against the choices of a scene.
pub mod resolver;
/// The session controller.
pub mod session;

pub use error::{FictionError, FictionResult, NameRule};
pub use history::HistoryEntry;
pub use registration::{Player, Registration, RegistrationErrors, validate_age, validate_name};
pub use resolver::MatchKind;
pub use session::Session;
