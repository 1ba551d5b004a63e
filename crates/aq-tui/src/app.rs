//! Top-level application state.

use std::time::Instant;

use aq_core::SceneGraph;
use aq_fiction::{FictionError, Registration, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::error;

use crate::config::TuiConfig;
use crate::screens::{self, Overlay, ScreenId};
use crate::transition::Fade;

/// Which registration field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The name field.
    Name,
    /// The age field.
    Age,
}

/// Registration form state: raw inputs plus inline errors.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    /// What the player has typed so far.
    pub input: Registration,
    /// Focused field.
    pub focus: Field,
    /// Inline message under the name field.
    pub name_error: Option<String>,
    /// Inline message under the age field.
    pub age_error: Option<String>,
}

impl RegisterForm {
    /// A form holding the given inputs, focused on the name.
    pub fn new(input: Registration) -> Self {
        Self {
            input,
            focus: Field::Name,
            name_error: None,
            age_error: None,
        }
    }

    /// The focused field's text.
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.input.name,
            Field::Age => &mut self.input.age,
        }
    }

    /// Move focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Age,
            Field::Age => Field::Name,
        };
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new(Registration::default())
    }
}

/// Q&A overlay state: which row is selected and which answer is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QaState {
    /// Highlighted question.
    pub selected: usize,
    /// Question whose answer is shown, if any.
    pub expanded: Option<usize>,
}

impl QaState {
    /// Move the highlight down, stopping at the last of `len` questions.
    pub fn next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the highlight up.
    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the highlighted answer, or close it if it is already open.
    pub fn toggle(&mut self) {
        self.expanded = if self.expanded == Some(self.selected) {
            None
        } else {
            Some(self.selected)
        };
    }
}

/// Main application state.
pub struct App {
    /// The session controller.
    pub session: Session,
    /// Screen being shown.
    pub screen: ScreenId,
    /// Open overlay, if any.
    pub overlay: Option<Overlay>,
    /// Registration form.
    pub form: RegisterForm,
    /// Q&A overlay state.
    pub qa: QaState,
    /// Fade after a choice.
    pub fade: Fade,
    /// Presentation settings.
    pub config: TuiConfig,
    /// Unrecoverable story error; shown instead of the game.
    pub fatal: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app on the title screen.
    pub fn new(graph: SceneGraph, config: TuiConfig) -> Self {
        Self {
            session: Session::new(graph),
            screen: ScreenId::Title,
            overlay: None,
            form: RegisterForm::default(),
            qa: QaState::default(),
            fade: Fade::new(config.fade),
            config,
            fatal: None,
            should_quit: false,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.fatal.is_some() {
            self.should_quit = true;
            return;
        }

        if let Some(overlay) = self.overlay {
            screens::overlay::handle_key(self, overlay, key);
            return;
        }

        match self.screen {
            ScreenId::Title => screens::title::handle_key(self, key),
            ScreenId::Register => screens::register::handle_key(self, key),
            ScreenId::Game => screens::game::handle_key(self, key),
        }
    }

    /// Open the registration form, pre-filled when a player is registered.
    pub fn open_registration(&mut self) {
        let input = self
            .session
            .player()
            .map(Registration::from_player)
            .unwrap_or_default();
        self.form = RegisterForm::new(input);
        self.screen = ScreenId::Register;
    }

    /// Validate the form; on success start (or update) the session.
    pub fn submit_registration(&mut self) {
        match self.form.input.submit() {
            Ok(player) => {
                if self.session.is_registered() {
                    self.session.update_player(player);
                } else {
                    self.session.start(player);
                    self.fade.begin(Instant::now());
                }
                self.form.name_error = None;
                self.form.age_error = None;
                self.screen = ScreenId::Game;
            }
            Err(errors) => {
                self.form.name_error = errors.name.map(|e| e.to_string());
                self.form.age_error = errors.age.map(|e| e.to_string());
            }
        }
    }

    /// Apply the `index`-th choice of the current scene.
    pub fn choose(&mut self, index: usize) {
        match self.session.choose(index) {
            Ok(_) => self.fade.begin(Instant::now()),
            Err(FictionError::InvalidChoice(_)) => {}
            Err(e) => self.fail(e),
        }
    }

    /// Stop the game: clear the session and go back to the title.
    pub fn stop(&mut self) {
        self.session.reset();
        self.form = RegisterForm::default();
        self.overlay = None;
        self.screen = ScreenId::Title;
    }

    /// Toggle an overlay.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == Some(overlay) {
            None
        } else {
            Some(overlay)
        };
    }

    /// Record an unrecoverable error.
    pub fn fail(&mut self, err: FictionError) {
        error!(%err, "story data error");
        self.fatal = Some(err.to_string());
    }
}
