//! Loading the story to play.

use std::path::Path;

use aq_core::{SceneGraph, StoryError};
use tracing::debug;

/// Load a story document, or the built-in adventure when none is given.
pub fn load_story(path: Option<&Path>) -> Result<SceneGraph, String> {
    let Some(path) = path else {
        return Ok(SceneGraph::adventure());
    };
    debug!(path = %path.display(), "loading story");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse_story(&json, &path.display().to_string())
}

/// Parse a story document. Integrity failures list every issue, one per line.
pub fn parse_story(json: &str, origin: &str) -> Result<SceneGraph, String> {
    match SceneGraph::from_json(json) {
        Ok(graph) => Ok(graph),
        Err(StoryError::InvalidGraph(issues)) => {
            let mut message = format!("{origin}: story failed its integrity check");
            for issue in &issues {
                message.push_str(&format!("\n  - {issue}"));
            }
            Err(message)
        }
        Err(e) => Err(format!("{origin}: {e}")),
    }
}
