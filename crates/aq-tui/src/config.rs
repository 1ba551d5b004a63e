//! Configuration for the terminal UI.

use std::time::Duration;

/// Default length of the fade after a choice.
pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

/// Presentation settings.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// How long scene content stays dimmed after a choice.
    pub fade: Duration,
    /// Whether illustration references are shown.
    pub show_illustrations: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            fade: DEFAULT_FADE,
            show_illustrations: true,
        }
    }
}

impl TuiConfig {
    /// Set the fade length in milliseconds. Zero disables the fade.
    pub fn with_fade_ms(mut self, ms: u64) -> Self {
        self.fade = Duration::from_millis(ms);
        self
    }

    /// Show or hide illustration references.
    pub fn with_illustrations(mut self, show: bool) -> Self {
        self.show_illustrations = show;
        self
    }
}
