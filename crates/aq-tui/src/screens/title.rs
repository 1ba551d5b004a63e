//! Title screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::shared::{centered_rect, status_line};

/// Handle a key on the title screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.open_registration(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

/// Draw the title card.
pub fn draw(frame: &mut Frame, area: Rect) {
    let card = centered_rect(60, 50, area);

    let lines = vec![
        Line::from(""),
        Line::from("The Adventure Game!")
            .style(Style::default().fg(Color::White).bold())
            .centered(),
        Line::from(""),
        Line::from("By: Guru Velivelli")
            .style(Style::default().fg(Color::Gray))
            .centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
            Span::styled("Start Game", Style::default().fg(Color::Magenta).bold()),
        ])
        .centered(),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(paragraph, card);
}

/// Status bar hints.
pub fn status() -> Line<'static> {
    status_line(&[("Enter", "start"), ("q", "quit")])
}
