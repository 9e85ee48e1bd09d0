//! Frame layout: tab bar, active panel, status area

use super::tabs::{render_password_tab, render_token_tab, render_xxhash_tab};
use crate::app::{App, AppMode, InputField};
use crate::notify::Tone;
use crate::panels::PanelId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Draw one frame
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(6), // Status/toasts
        ])
        .split(f.area());

    let titles: Vec<Line> = PanelId::ALL
        .iter()
        .map(|panel| {
            let title = format!("{} {panel}", panel.index() + 1);
            if *panel == app.active {
                Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(title))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("hashlab"))
        .select(app.active.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match app.active {
        PanelId::Argon2 => render_password_tab(f, app, PanelId::Argon2, chunks[1]),
        PanelId::Bcrypt => render_password_tab(f, app, PanelId::Bcrypt, chunks[1]),
        PanelId::Xxhash => render_xxhash_tab(f, app, chunks[1]),
        PanelId::Token => render_token_tab(f, app, chunks[1]),
    }

    let mut status_text: Vec<Line> = app
        .toasts
        .iter()
        .map(|toast| {
            let color = match toast.tone() {
                Tone::Success => Color::Green,
                Tone::Info => Color::Cyan,
                Tone::Warning => Color::Yellow,
                Tone::Error => Color::Red,
            };
            let mut spans = vec![Span::styled(
                toast.title().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )];
            if let Some(description) = toast.description() {
                spans.push(Span::raw(format!("  {description}")));
            }
            Line::from(spans)
        })
        .collect();

    let hint = match app.mode {
        AppMode::Normal => "Tab/1-4 switch · y copy · q quit".to_string(),
        AppMode::Input(field @ (InputField::Claims | InputField::Header)) => format!(
            "Editing {} · arrows move · Alt+Enter newline · Enter submit · Esc cancel",
            field.label()
        ),
        AppMode::Input(field) => format!(
            "Editing {} · arrows move · Enter submit · Esc cancel",
            field.label()
        ),
    };
    status_text.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let status =
        Paragraph::new(status_text).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);
}
