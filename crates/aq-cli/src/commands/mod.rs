pub mod check;
pub mod export;
pub mod graph;
pub mod play;
pub mod scenes;
pub mod show;
pub mod walk;

use std::path::Path;

use aq_core::{GraphIssue, Scene, SceneGraph, StoryError};
use tracing::debug;

/// Load a story document, or the built-in adventure when no path is given.
/// Integrity issues are printed to stderr.
fn load_story(path: Option<&Path>) -> Result<SceneGraph, String> {
    let Some(path) = path else {
        return Ok(SceneGraph::adventure());
    };

    debug!(path = %path.display(), "loading story");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    match SceneGraph::from_json(&json) {
        Ok(graph) => Ok(graph),
        Err(StoryError::InvalidGraph(issues)) => {
            print_issues(&issues);
            Err(format!("{}: story failed its integrity check", path.display()))
        }
        Err(e) => Err(format!("{}: {e}", path.display())),
    }
}

/// Human-readable name of the story source.
fn story_name(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in adventure".to_string())
}

/// Print integrity issues to stderr.
fn print_issues(issues: &[GraphIssue]) {
    for issue in issues {
        eprintln!("  - {issue}");
    }
    eprintln!(
        "  {} issue{}",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" },
    );
}

/// Short classification of a scene for listings.
fn scene_kind(graph: &SceneGraph, scene: &Scene) -> &'static str {
    if scene.id == *graph.start() {
        "start"
    } else if scene.is_ending() {
        "ending"
    } else if scene.choices.len() > 1 {
        "hub"
    } else {
        "scene"
    }
}
