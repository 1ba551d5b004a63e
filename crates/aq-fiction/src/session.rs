//! The session controller.

use aq_core::{Choice, Scene, SceneGraph, SceneId};
use tracing::{debug, info};

use crate::error::{FictionError, FictionResult};
use crate::history::HistoryEntry;
use crate::registration::Player;
use crate::resolver::{MatchKind, resolve_in_graph};

/// The single source of truth for where the player is and what they did.
#[derive(Debug, Clone)]
pub struct Session {
    /// The story being played.
    graph: SceneGraph,
    /// Registered player, if any.
    player: Option<Player>,
    /// Current scene; always a key of `graph`.
    current: SceneId,
    /// Choices applied since the last reset.
    moves: u32,
    /// Applied choices in order.
    history: Vec<HistoryEntry>,
}

impl Session {
    /// Create an unregistered session positioned at the start scene.
    pub fn new(graph: SceneGraph) -> Self {
        let current = graph.start().clone();
        Self {
            graph,
            player: None,
            current,
            moves: 0,
            history: Vec::new(),
        }
    }

    /// The story being played.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The registered player, if any.
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Whether a player has registered.
    pub fn is_registered(&self) -> bool {
        self.player.is_some()
    }

    /// ID of the current scene.
    pub fn current_id(&self) -> &SceneId {
        &self.current
    }

    /// The current scene.
    pub fn current_scene(&self) -> FictionResult<&Scene> {
        Ok(self.graph.get_scene(self.current.as_str())?)
    }

    /// Choices applied since the last reset.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Applied choices, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// History entries as 1-indexed display labels.
    pub fn history_labels(&self) -> Vec<String> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.label(i))
            .collect()
    }

    /// Greeting shown above the scene once a player is registered.
    pub fn welcome(&self) -> Option<String> {
        self.player
            .as_ref()
            .map(|p| format!("Welcome, {}! Your adventure continues...", p.name()))
    }

    /// Begin a fresh journey for `player` at the start scene.
    pub fn start(&mut self, player: Player) {
        info!(player = player.name(), age = player.age(), "session started");
        self.player = Some(player);
        self.rewind();
    }

    /// Replace the registered player's details, keeping position and history.
    pub fn update_player(&mut self, player: Player) {
        info!(player = player.name(), age = player.age(), "player updated");
        self.player = Some(player);
    }

    /// Apply a choice of the current scene.
    ///
    /// The choice must come from the current scene's choice list. Choosing a
    /// path back to the start ("play again") clears moves and history as part
    /// of the same transition instead of recording it.
    pub fn apply_choice(&mut self, choice: &Choice) {
        self.history
            .push(HistoryEntry::new(self.current.clone(), choice.text.clone()));
        self.current = choice.next_scene.clone();
        self.moves += 1;

        if self.current == *self.graph.start() {
            info!("returned to start, journey cleared");
            self.moves = 0;
            self.history.clear();
        } else {
            debug!(
                scene = %self.current,
                choice = %choice.text,
                moves = self.moves,
                "choice applied"
            );
        }
    }

    /// Apply the `index`-th (0-based) choice of the current scene and return
    /// the scene it leads to.
    pub fn choose(&mut self, index: usize) -> FictionResult<&Scene> {
        let choice = self
            .current_scene()?
            .choices
            .get(index)
            .cloned()
            .ok_or(FictionError::InvalidChoice(index))?;
        self.apply_choice(&choice);
        self.current_scene()
    }

    /// Find the choice of the current scene that `input` names, without
    /// applying it.
    ///
    /// See [`resolve_in_graph`] for the matching rules.
    pub fn resolve(&self, input: &str) -> FictionResult<(usize, MatchKind)> {
        let resolved = resolve_in_graph(&self.graph, self.current_scene()?, input);
        match resolved {
            Some(found) => Ok(found),
            None => {
                debug!(scene = %self.current, input, "no choice matches");
                Err(FictionError::ChoiceNotFound(input.to_string()))
            }
        }
    }

    /// Apply the choice of the current scene that best matches `input`.
    pub fn choose_by_label(&mut self, input: &str) -> FictionResult<&Scene> {
        let (index, _) = self.resolve(input)?;
        self.choose(index)
    }

    /// Whether the current scene is an ending.
    pub fn is_terminal(&self) -> bool {
        self.current.is_ending()
    }

    /// Return to a pristine, unregistered session at the start scene.
    pub fn reset(&mut self) {
        info!("session reset");
        self.player = None;
        self.rewind();
    }

    fn rewind(&mut self) {
        self.current = self.graph.start().clone();
        self.moves = 0;
        self.history.clear();
    }
}
