//! Screens and overlays.

pub mod game;
pub mod overlay;
pub mod register;
pub mod title;

/// Identifies which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Title card with the start button.
    Title,
    /// Name and age form.
    Register,
    /// Scene, choices, and journey stats.
    Game,
}

/// Dismissible overlays on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Static help topics.
    Help,
    /// Questions and answers.
    Qa,
}
