use std::fmt;

use crate::scene::SceneId;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur when building or reading a scene graph.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The requested scene ID does not exist in the graph.
    ///
    /// A well-formed graph never produces this at runtime; seeing it means the
    /// story data is broken.
    #[error("unknown scene: \"{0}\"")]
    UnknownScene(String),

    /// The graph failed its integrity check.
    #[error("scene graph has {} integrity issue(s)", .0.len())]
    InvalidGraph(Vec<GraphIssue>),

    /// A story document could not be read or written as JSON.
    #[error("story document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single integrity problem found in a scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// The designated start scene is not part of the graph.
    MissingStart(SceneId),
    /// Two scenes share the same ID.
    DuplicateScene(SceneId),
    /// A scene has no narrative text.
    EmptyText(SceneId),
    /// A choice has no display text.
    EmptyChoiceText {
        /// Scene owning the choice.
        scene: SceneId,
        /// Position of the choice within the scene.
        index: usize,
    },
    /// A choice points at a scene that does not exist.
    DanglingChoice {
        /// Scene owning the choice.
        scene: SceneId,
        /// Display text of the choice.
        choice: String,
        /// The missing destination.
        target: SceneId,
    },
    /// A non-ending scene offers no choices.
    DeadEnd(SceneId),
    /// An ending offers a choice that does not lead back to the start.
    EndingLeadsOnward {
        /// The ending scene.
        scene: SceneId,
        /// Where the offending choice goes.
        target: SceneId,
    },
    /// The graph contains no ending scene at all.
    NoEnding,
    /// A scene reachable from the start has no path to any ending.
    CannotFinish(SceneId),
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart(id) => write!(f, "start scene \"{id}\" is missing"),
            Self::DuplicateScene(id) => write!(f, "scene \"{id}\" is defined more than once"),
            Self::EmptyText(id) => write!(f, "scene \"{id}\" has no text"),
            Self::EmptyChoiceText { scene, index } => {
                write!(f, "choice #{} of scene \"{scene}\" has no text", index + 1)
            }
            Self::DanglingChoice {
                scene,
                choice,
                target,
            } => write!(
                f,
                "choice \"{choice}\" of scene \"{scene}\" leads to unknown scene \"{target}\""
            ),
            Self::DeadEnd(id) => write!(f, "scene \"{id}\" is not an ending but has no choices"),
            Self::EndingLeadsOnward { scene, target } => write!(
                f,
                "ending \"{scene}\" leads on to \"{target}\" instead of back to the start"
            ),
            Self::NoEnding => write!(f, "no ending scene (ids starting with \"end-\")"),
            Self::CannotFinish(id) => write!(f, "scene \"{id}\" cannot reach any ending"),
        }
    }
}
