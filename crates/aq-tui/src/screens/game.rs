//! Game screen: the current scene, its choices, and journey stats.

use std::time::Instant;

use aq_core::Scene;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::screens::Overlay;
use crate::shared::status_line;

/// Handle a key on the game screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(n) = c.to_digit(10).and_then(|n| (n as usize).checked_sub(1)) {
                app.choose(n);
            }
        }
        KeyCode::Char('h') => app.toggle_overlay(Overlay::Help),
        KeyCode::Char('a') => app.toggle_overlay(Overlay::Qa),
        KeyCode::Char('m') => app.open_registration(),
        KeyCode::Char('s') => app.stop(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

/// Draw the header, the scene panel, and the stats panel.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
        ])
        .split(area);

    draw_header(frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[1]);

    match app.session.current_scene() {
        Ok(scene) => draw_scene(frame, app, scene, columns[0]),
        Err(e) => {
            let msg = Paragraph::new(Span::styled(e.to_string(), Style::default().fg(Color::Red)));
            frame.render_widget(msg, columns[0]);
        }
    }
    draw_stats(frame, app, columns[1]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Adventure Quest", Style::default().fg(Color::White).bold()),
        Span::raw("   "),
        Span::styled("[h]Help", Style::default().fg(Color::Gray)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("[a]Q&A", Style::default().fg(Color::Gray)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("[m]Main Menu", Style::default().fg(Color::Gray)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("[s]Stop Game", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_scene(frame: &mut Frame, app: &App, scene: &Scene, area: Rect) {
    let dimmed = app.fade.is_active(Instant::now());
    let text_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let choice_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Magenta)
    };

    let mut lines = Vec::new();

    if let Some(welcome) = app.session.welcome() {
        lines.push(Line::from(Span::styled(
            welcome,
            Style::default().fg(Color::Magenta).bold(),
        )));
        lines.push(Line::from(""));
    }

    if app.config.show_illustrations
        && let Some(image) = &scene.image
    {
        lines.push(Line::from(Span::styled(
            format!("[illustration] {image}"),
            Style::default().fg(Color::DarkGray).italic(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(scene.text.clone(), text_style)));
    lines.push(Line::from(""));

    for (i, choice) in scene.choices.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{} ->", choice.text), choice_style),
        ]));
        if app.config.show_illustrations
            && let Some(image) = &choice.image
        {
            lines.push(Line::from(Span::styled(
                format!("    [illustration] {image}"),
                Style::default().fg(Color::DarkGray).italic(),
            )));
        }
    }

    let title = if app.session.is_terminal() {
        " The End ".to_string()
    } else {
        format!(" {} ", scene.id)
    };
    let border = if app.session.is_terminal() {
        Color::Yellow
    } else {
        Color::Blue
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (name, age) = session
        .player()
        .map(|p| (p.name().to_string(), p.age().to_string()))
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(format!("Adventurer: {name}")),
        Line::from(format!("Age: {age} years")),
        Line::from(format!("Moves Made: {}", session.moves())),
        Line::from(""),
        Line::from(Span::styled("Choice History:", Style::default().bold())),
    ];
    lines.extend(session.history_labels().into_iter().map(|label| {
        Line::from(Span::styled(label, Style::default().fg(Color::Gray)))
    }));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Journey Stats ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Status bar hints; endings offer "play again" instead of "choose".
pub fn status(app: &App) -> Line<'static> {
    if app.session.is_terminal() {
        status_line(&[("1", "play again"), ("s", "stop"), ("q", "quit")])
    } else {
        status_line(&[
            ("1-9", "choose"),
            ("h", "help"),
            ("a", "Q&A"),
            ("m", "menu"),
            ("s", "stop"),
            ("q", "quit"),
        ])
    }
}
