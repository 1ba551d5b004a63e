//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::screens::{self, ScreenId};

/// Redraw interval while a fade is running.
const FADE_TICK: Duration = Duration::from_millis(30);

/// Launch the TUI application.
pub fn run(mut app: App) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        // Keep redrawing while the fade runs; otherwise block on input.
        if let Some(left) = app.fade.remaining(Instant::now()) {
            let ready =
                event::poll(left.min(FADE_TICK)).map_err(|e| format!("event error: {e}"))?;
            if !ready {
                continue;
            }
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if let Some(ref err) = app.fatal {
        let msg = Paragraph::new(vec![
            Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from("The story data is broken. Press any key to exit."),
        ])
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
        frame.render_widget(msg, chunks[0]);
        return;
    }

    let status = match app.screen {
        ScreenId::Title => {
            screens::title::draw(frame, chunks[0]);
            screens::title::status()
        }
        ScreenId::Register => {
            screens::register::draw(frame, app, chunks[0]);
            screens::register::status()
        }
        ScreenId::Game => {
            screens::game::draw(frame, app, chunks[0]);
            screens::game::status(app)
        }
    };

    let status = Paragraph::new(status).style(Style::default().fg(Color::DarkGray).bg(Color::Black));
    frame.render_widget(status, chunks[1]);

    if let Some(overlay) = app.overlay {
        screens::overlay::draw(frame, app, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::SceneGraph;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use crate::config::TuiConfig;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn playing() -> App {
        let mut app = App::new(SceneGraph::adventure(), TuiConfig::default().with_fade_ms(0));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Guru");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "30");
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn title_screen() {
        let app = App::new(SceneGraph::adventure(), TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains("The Adventure Game!"));
        assert!(screen.contains("Start Game"));
    }

    #[test]
    fn registration_shows_inline_errors() {
        let mut app = App::new(SceneGraph::adventure(), TuiConfig::default());
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "X1");
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("What is your name?"));
        assert!(screen.contains("> X1"));
        assert!(screen.contains("Please use only letters (A-Z) in your name!"));
        assert!(screen.contains("Please enter a valid age between 0 and 150!"));
    }

    #[test]
    fn oversized_input_renders() {
        let mut app = App::new(SceneGraph::adventure(), TuiConfig::default());
        press(&mut app, KeyCode::Enter);
        app.form.input.name = "a".repeat(70_000);

        let screen = render(&app);
        assert!(screen.contains("> aaaa"));
    }

    #[test]
    fn game_screen_shows_scene_and_stats() {
        let mut app = playing();
        press(&mut app, KeyCode::Char('1'));

        let screen = render(&app);
        assert!(screen.contains("Welcome, Guru! Your adventure continues..."));
        assert!(screen.contains("mysterious crossroads"));
        assert!(screen.contains("[1] Take the misty forest path"));
        assert!(screen.contains("[3] Follow the mountain trail"));
        assert!(screen.contains("Adventurer: Guru"));
        assert!(screen.contains("Age: 30 years"));
        assert!(screen.contains("Moves Made: 1"));
        assert!(screen.contains("1. Begin Journey"));
    }

    #[test]
    fn ending_is_framed() {
        let mut app = playing();
        for key in ['1', '2', '1', '1'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(app.session.is_terminal());

        let screen = render(&app);
        assert!(screen.contains("The End"));
        assert!(screen.contains("[1] Play Again"));
        assert!(screen.contains("play again"));
    }

    #[test]
    fn illustrations_can_be_hidden() {
        let mut app = playing();
        assert!(render(&app).contains("[illustration]"));
        app.config.show_illustrations = false;
        assert!(!render(&app).contains("[illustration]"));
    }

    #[test]
    fn qa_overlay_expands_one_answer() {
        let mut app = playing();
        press(&mut app, KeyCode::Char('a'));
        let screen = render(&app);
        assert!(screen.contains("Questions & Answers"));
        assert!(screen.contains("How many endings are there?"));
        assert!(!screen.contains("There are three unique endings to discover!"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains("There are three unique endings to discover!"));
    }

    #[test]
    fn help_overlay_lists_topics() {
        let mut app = playing();
        press(&mut app, KeyCode::Char('h'));
        let screen = render(&app);
        assert!(screen.contains("Game Help"));
        assert!(screen.contains("Navigation"));
        assert!(screen.contains("Endings"));
    }
}
