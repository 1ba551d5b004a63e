//! Help and Q&A overlays.

use aq_core::{HELP_TOPICS, QA_PAIRS};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::app::App;
use crate::screens::Overlay;
use crate::shared::draw_popup;

/// Handle a key while an overlay is open.
pub fn handle_key(app: &mut App, overlay: Overlay, key: KeyEvent) {
    match (overlay, key.code) {
        (_, KeyCode::Esc) | (Overlay::Help, KeyCode::Char('h')) | (Overlay::Qa, KeyCode::Char('a')) => {
            app.overlay = None;
        }
        (Overlay::Qa, KeyCode::Char('j') | KeyCode::Down) => app.qa.next(QA_PAIRS.len()),
        (Overlay::Qa, KeyCode::Char('k') | KeyCode::Up) => app.qa.prev(),
        (Overlay::Qa, KeyCode::Enter | KeyCode::Char(' ')) => app.qa.toggle(),
        _ => {}
    }
}

/// Draw the open overlay.
pub fn draw(frame: &mut Frame, app: &App, overlay: Overlay) {
    match overlay {
        Overlay::Help => draw_help(frame),
        Overlay::Qa => draw_qa(frame, app),
    }
}

fn draw_help(frame: &mut Frame) {
    let mut lines = Vec::new();
    for topic in HELP_TOPICS {
        lines.push(Line::from(Span::styled(topic.title, Style::default().bold())));
        lines.push(Line::from(topic.body));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Keys: 1-9 choose  h help  a Q&A  m main menu  s stop game  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    draw_popup(frame, "Game Help", lines);
}

fn draw_qa(frame: &mut Frame, app: &App) {
    let mut lines = Vec::new();
    for (i, pair) in QA_PAIRS.iter().enumerate() {
        let selected = i == app.qa.selected;
        let marker = if app.qa.expanded == Some(i) { "v " } else { "> " };
        let style = if selected {
            Style::default().fg(Color::Magenta).bold()
        } else {
            Style::default().bold()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", pair.question),
            style,
        )));
        if app.qa.expanded == Some(i) {
            lines.push(Line::from(Span::styled(
                format!("  {}", pair.answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "j/k: move  Enter: show/hide answer",
        Style::default().fg(Color::DarkGray),
    )));
    draw_popup(frame, "Questions & Answers", lines);
}
