use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{GraphIssue, StoryError, StoryResult};
use crate::scene::{Choice, Scene, SceneId};

/// The immutable narrative graph.
///
/// A `SceneGraph` obtained from [`SceneGraph::builder`] or
/// [`SceneGraph::from_json`] has passed [`SceneGraph::check`]: every choice
/// leads somewhere, and every scene reachable from the start can still reach
/// an ending.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    start: SceneId,
    scenes: Vec<Scene>,

    // Index
    by_id: HashMap<SceneId, usize>,
}

/// On-disk shape of a story document.
#[derive(Serialize, Deserialize)]
struct StoryDocument {
    start: SceneId,
    scenes: Vec<Scene>,
}

impl SceneGraph {
    /// Start building a graph whose start scene is `start`.
    pub fn builder(start: impl Into<SceneId>) -> SceneGraphBuilder {
        SceneGraphBuilder {
            start: start.into(),
            scenes: Vec::new(),
        }
    }

    /// Index scenes without checking them. Callers are responsible for the
    /// graph being well formed.
    pub(crate) fn assemble(start: SceneId, scenes: Vec<Scene>) -> Self {
        let by_id = scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| (scene.id.clone(), i))
            .collect();
        Self {
            start,
            scenes,
            by_id,
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The designated start scene ID.
    pub fn start(&self) -> &SceneId {
        &self.start
    }

    /// Look up a scene by ID.
    pub fn get_scene(&self, id: &str) -> StoryResult<&Scene> {
        self.by_id
            .get(id)
            .map(|&i| &self.scenes[i])
            .ok_or_else(|| StoryError::UnknownScene(id.to_string()))
    }

    /// Whether a scene with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All scenes in authored order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Every choice paired with the scene that offers it.
    pub fn edges(&self) -> impl Iterator<Item = (&Scene, &Choice)> {
        self.scenes
            .iter()
            .flat_map(|scene| scene.choices.iter().map(move |choice| (scene, choice)))
    }

    /// Number of choices across all scenes.
    pub fn edge_count(&self) -> usize {
        self.scenes.iter().map(|s| s.choices.len()).sum()
    }

    /// Ending scenes in authored order.
    pub fn endings(&self) -> Vec<&Scene> {
        self.scenes.iter().filter(|s| s.is_ending()).collect()
    }

    /// Scenes that branch, i.e. offer more than one choice.
    pub fn hubs(&self) -> Vec<&Scene> {
        self.scenes.iter().filter(|s| s.choices.len() > 1).collect()
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Scene IDs reachable from `id` (including `id` itself), in
    /// breadth-first order. Empty if `id` is unknown.
    pub fn reachable_from(&self, id: &str) -> Vec<&SceneId> {
        let Some(&first) = self.by_id.get(id) else {
            return Vec::new();
        };

        let mut seen = HashSet::from([first]);
        let mut queue = VecDeque::from([first]);
        let mut order = Vec::new();

        while let Some(i) = queue.pop_front() {
            let scene = &self.scenes[i];
            order.push(&scene.id);
            for choice in &scene.choices {
                if let Some(&next) = self.by_id.get(choice.next_scene.as_str())
                    && seen.insert(next)
                {
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Scene IDs from which at least one ending can be reached.
    fn finishing_scenes(&self) -> HashSet<&str> {
        let mut predecessors: HashMap<&str, Vec<&str>> = HashMap::new();
        for (scene, choice) in self.edges() {
            predecessors
                .entry(choice.next_scene.as_str())
                .or_default()
                .push(scene.id.as_str());
        }

        let mut finishing: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        for ending in self.endings() {
            if finishing.insert(ending.id.as_str()) {
                queue.push_back(ending.id.as_str());
            }
        }

        while let Some(id) = queue.pop_front() {
            for &prev in predecessors.get(id).map(Vec::as_slice).unwrap_or_default() {
                if finishing.insert(prev) {
                    queue.push_back(prev);
                }
            }
        }

        finishing
    }

    // -----------------------------------------------------------------------
    // Integrity
    // -----------------------------------------------------------------------

    /// Run every integrity check and return all problems found.
    pub fn check(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();

        if !self.contains(self.start.as_str()) {
            issues.push(GraphIssue::MissingStart(self.start.clone()));
        }

        for scene in &self.scenes {
            if scene.text.trim().is_empty() {
                issues.push(GraphIssue::EmptyText(scene.id.clone()));
            }
            if !scene.is_ending() && scene.choices.is_empty() {
                issues.push(GraphIssue::DeadEnd(scene.id.clone()));
            }

            for (index, choice) in scene.choices.iter().enumerate() {
                if choice.text.trim().is_empty() {
                    issues.push(GraphIssue::EmptyChoiceText {
                        scene: scene.id.clone(),
                        index,
                    });
                }
                if !self.contains(choice.next_scene.as_str()) {
                    issues.push(GraphIssue::DanglingChoice {
                        scene: scene.id.clone(),
                        choice: choice.text.clone(),
                        target: choice.next_scene.clone(),
                    });
                }
                if scene.is_ending() && choice.next_scene != self.start {
                    issues.push(GraphIssue::EndingLeadsOnward {
                        scene: scene.id.clone(),
                        target: choice.next_scene.clone(),
                    });
                }
            }
        }

        if self.endings().is_empty() {
            issues.push(GraphIssue::NoEnding);
        } else {
            let finishing = self.finishing_scenes();
            for id in self.reachable_from(self.start.as_str()) {
                if !finishing.contains(id.as_str()) {
                    issues.push(GraphIssue::CannotFinish(id.clone()));
                }
            }
        }

        issues
    }

    // -----------------------------------------------------------------------
    // Documents
    // -----------------------------------------------------------------------

    /// Serialize the graph as a pretty-printed JSON story document.
    pub fn to_json(&self) -> StoryResult<String> {
        let doc = StoryDocument {
            start: self.start.clone(),
            scenes: self.scenes.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Read a JSON story document and check it.
    pub fn from_json(json: &str) -> StoryResult<Self> {
        let doc: StoryDocument = serde_json::from_str(json)?;
        doc.scenes
            .into_iter()
            .fold(SceneGraph::builder(doc.start), SceneGraphBuilder::scene)
            .build()
    }
}

/// Collects scenes and produces a checked [`SceneGraph`].
#[derive(Debug, Clone)]
pub struct SceneGraphBuilder {
    start: SceneId,
    scenes: Vec<Scene>,
}

impl SceneGraphBuilder {
    /// Add a scene.
    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Check the collected scenes and produce the graph.
    pub fn build(self) -> StoryResult<SceneGraph> {
        let mut seen = HashSet::new();
        let mut issues: Vec<GraphIssue> = self
            .scenes
            .iter()
            .filter(|s| !seen.insert(s.id.clone()))
            .map(|s| GraphIssue::DuplicateScene(s.id.clone()))
            .collect();

        let graph = SceneGraph::assemble(self.start, self.scenes);
        issues.extend(graph.check());

        if issues.is_empty() {
            Ok(graph)
        } else {
            Err(StoryError::InvalidGraph(issues))
        }
    }
}
