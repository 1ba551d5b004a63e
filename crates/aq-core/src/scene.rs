use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix that marks a scene ID as an ending.
pub const ENDING_PREFIX: &str = "end-";

/// Identifier of a scene in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Endings are recognized by the `end-` naming convention.
    pub fn is_ending(&self) -> bool {
        self.0.starts_with(ENDING_PREFIX)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SceneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SceneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SceneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A node in the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier.
    pub id: SceneId,
    /// Narrative text shown to the player.
    pub text: String,
    /// Optional illustration (a URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Choices in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no illustration and no choices.
    pub fn new(id: impl Into<SceneId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image: None,
            choices: Vec::new(),
        }
    }

    /// Set the illustration.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Whether this scene is one of the endings.
    pub fn is_ending(&self) -> bool {
        self.id.is_ending()
    }
}

/// A labeled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown on the choice.
    pub text: String,
    /// Destination scene.
    pub next_scene: SceneId,
    /// Optional illustration (a URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Choice {
    /// Create a choice leading to `next_scene`.
    pub fn new(text: impl Into<String>, next_scene: impl Into<SceneId>) -> Self {
        Self {
            text: text.into(),
            next_scene: next_scene.into(),
            image: None,
        }
    }

    /// Set the illustration.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }
}
