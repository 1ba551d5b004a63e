//! Matching player input against the choices of a scene.

use aq_core::{Scene, SceneGraph};
use strsim::jaro_winkler;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// How an input was matched to a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// 1-indexed position.
    Number,
    /// Case-insensitive label.
    Exact,
    /// Closest label by similarity.
    Fuzzy,
}

/// Resolve input to the index of one of `scene`'s choices.
///
/// Tries, in order: a 1-indexed number, an exact label (case-insensitive),
/// then the closest label by Jaro-Winkler similarity.
pub fn resolve_choice(scene: &Scene, input: &str) -> Option<(usize, MatchKind)> {
    let input = input.trim();

    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .filter(|i| *i < scene.choices.len())
            .map(|i| (i, MatchKind::Number));
    }

    let input_lower = input.to_lowercase();
    if let Some(i) = scene
        .choices
        .iter()
        .position(|c| c.text.to_lowercase() == input_lower)
    {
        return Some((i, MatchKind::Exact));
    }

    fuzzy_match(scene, &input_lower, FUZZY_THRESHOLD)
        .first()
        .map(|(i, _)| (*i, MatchKind::Fuzzy))
}

/// Resolve input against `scene` within `graph`.
///
/// Like [`resolve_choice`], but a fuzzy match is refused when the input is
/// the exact label of a choice somewhere else in the graph: that input names
/// a different path, not a typo of one offered here.
pub fn resolve_in_graph(
    graph: &SceneGraph,
    scene: &Scene,
    input: &str,
) -> Option<(usize, MatchKind)> {
    let resolved = resolve_choice(scene, input)?;
    if resolved.1 == MatchKind::Fuzzy && is_known_label(graph, input) {
        return None;
    }
    Some(resolved)
}

/// Whether `input` is the label (case-insensitive) of any choice in `graph`.
pub fn is_known_label(graph: &SceneGraph, input: &str) -> bool {
    let input_lower = input.trim().to_lowercase();
    graph
        .edges()
        .any(|(_, choice)| choice.text.to_lowercase() == input_lower)
}

/// Choices whose label scores at least `threshold` against the input.
///
/// Returns (choice index, score) sorted by score descending.
pub fn fuzzy_match(scene: &Scene, input: &str, threshold: f64) -> Vec<(usize, f64)> {
    let input_lower = input.to_lowercase();
    let mut matches: Vec<(usize, f64)> = scene
        .choices
        .iter()
        .enumerate()
        .filter_map(|(i, choice)| {
            let score = jaro_winkler(&input_lower, &choice.text.to_lowercase());
            (score >= threshold).then_some((i, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}
