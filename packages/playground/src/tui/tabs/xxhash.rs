use super::field_widget;
use crate::app::{App, InputField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// xxHash panel
pub fn render_xxhash_tab(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input
            Constraint::Length(3), // Variant and seed
            Constraint::Length(4), // Digest
        ])
        .split(area);

    f.render_widget(field_widget(app, InputField::XxhashInput, 'i'), chunks[0]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);
    let variant = Paragraph::new(app.xxhash.variant().as_str())
        .block(Block::default().borders(Borders::ALL).title("Variant [v]"));
    f.render_widget(variant, row[0]);
    f.render_widget(field_widget(app, InputField::XxhashSeed, 's'), row[1]);

    let mut lines = Vec::new();
    if let Some(digest) = app.xxhash.output() {
        lines.push(Line::from(Span::raw(digest.value().to_hex())));
        lines.push(Line::from(Span::styled(
            format!("{} µs", digest.elapsed().as_micros()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(e) = app.xxhash.last_error() {
        lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let digest = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Digest [Enter]"))
        .wrap(Wrap { trim: false });
    f.render_widget(digest, chunks[2]);
}
