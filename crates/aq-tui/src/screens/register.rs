//! Registration screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Field};
use crate::screens::ScreenId;
use crate::shared::{centered_rect, status_line};

const NAME_HINT: &str =
    "Enter your name using only letters (A-Z). No numbers or special characters allowed.";
const AGE_HINT: &str = "Enter your age (8-150). Must be a whole number.";

/// Handle a key on the registration form.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_registration(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.form.toggle_focus();
        }
        KeyCode::Esc => {
            app.screen = if app.session.is_registered() {
                ScreenId::Game
            } else {
                ScreenId::Title
            };
        }
        KeyCode::Backspace => {
            app.form.focused_mut().pop();
        }
        KeyCode::Char(c) => app.form.focused_mut().push(c),
        _ => {}
    }
}

/// Draw the registration form.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(70, 80, area);
    let block = Block::default()
        .title(" Welcome, brave adventurer! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name label + hint
            Constraint::Length(3), // Name input
            Constraint::Length(2), // Name error
            Constraint::Length(2), // Age label + hint
            Constraint::Length(3), // Age input
            Constraint::Length(2), // Age error
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    draw_label(frame, "What is your name?", NAME_HINT, rows[0]);
    draw_input(frame, &form.input.name, form.focus == Field::Name, rows[1]);
    draw_error(frame, form.name_error.as_deref(), rows[2]);
    draw_label(frame, "How old are you?", AGE_HINT, rows[3]);
    draw_input(frame, &form.input.age, form.focus == Field::Age, rows[4]);
    draw_error(frame, form.age_error.as_deref(), rows[5]);

    let submit = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
        Span::styled("Begin Adventure", Style::default().fg(Color::Magenta).bold()),
    ]))
    .centered();
    frame.render_widget(submit, rows[6]);
}

fn draw_label(frame: &mut Frame, label: &str, hint: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().bold())),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(frame: &mut Frame, text: &str, focused: bool, area: Rect) {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let input = Paragraph::new(format!("> {text}")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);

    if focused {
        // Offset by 2 for "> ", plus 1 for the left border
        let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = area.x.saturating_add(3).saturating_add(typed);
        if cursor_x < area.x.saturating_add(area.width.saturating_sub(1)) {
            frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
        }
    }
}

fn draw_error(frame: &mut Frame, message: Option<&str>, area: Rect) {
    if let Some(message) = message {
        let error = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error, area);
    }
}

/// Status bar hints.
pub fn status() -> Line<'static> {
    status_line(&[
        ("Enter", "begin"),
        ("Tab", "switch field"),
        ("Esc", "back"),
        ("Ctrl+C", "quit"),
    ])
}
