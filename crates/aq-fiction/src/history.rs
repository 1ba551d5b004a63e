//! Choice history records.

use aq_core::SceneId;

/// One applied choice: where the player was and what they picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Scene the choice was made in.
    pub scene: SceneId,
    /// Display text of the chosen option.
    pub choice: String,
}

impl HistoryEntry {
    /// Create a history entry.
    pub fn new(scene: SceneId, choice: impl Into<String>) -> Self {
        Self {
            scene,
            choice: choice.into(),
        }
    }

    /// Display label for this entry at `position` (0-based) in the history.
    ///
    /// Numbers are derived from the position, never stored.
    pub fn label(&self, position: usize) -> String {
        format!("{}. {}", position + 1, self.choice)
    }
}
