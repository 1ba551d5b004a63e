//! Core types for Adventure Quest: scenes, choices, and the scene graph.
//!
//! The graph is pure data. It is built once, checked for integrity, and never
//! mutated afterwards. Session state lives in `aq-fiction`; this crate only
//! answers "what is at this scene and where can the player go from here".

/// Error types used throughout the crate.
pub mod error;
/// The immutable scene graph and its integrity checks.
pub mod graph;
/// Static help topics and questions shown beside the story.
pub mod guide;
/// Scene and choice records.
pub mod scene;
/// The built-in adventure.
pub mod story;

/// Re-export error types.
pub use error::{GraphIssue, StoryError, StoryResult};
/// Re-export graph types.
pub use graph::{SceneGraph, SceneGraphBuilder};
/// Re-export guide content.
pub use guide::{HELP_TOPICS, HelpTopic, QA_PAIRS, QaPair};
/// Re-export scene types.
pub use scene::{Choice, ENDING_PREFIX, Scene, SceneId};
