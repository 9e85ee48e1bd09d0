//! Per-panel renderers

pub mod password;
pub mod token;
pub mod xxhash;

pub use password::render_password_tab;
pub use token::render_token_tab;
pub use xxhash::render_xxhash_tab;

use crate::app::{App, AppMode, InputField};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// A bordered text field titled with its label and key; highlighted with a
/// cursor while being edited, masked if secret
pub(crate) fn field_widget<'a>(app: &'a App, field: InputField, key: char) -> Paragraph<'a> {
    let text = app.field_text(field);
    let shown = if field.is_secret() {
        "*".repeat(text.chars().count())
    } else {
        text.to_string()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} [{key}]", field.label()));
    let body = if app.mode == AppMode::Input(field) {
        block = block.border_style(Style::default().fg(Color::Yellow));
        with_cursor(&shown, app.cursor())
    } else {
        Text::raw(shown)
    };

    Paragraph::new(body).block(block).wrap(Wrap { trim: false })
}

/// `text` with the character at `cursor` drawn reversed; a trailing space
/// stands in when the cursor sits at a line end
fn with_cursor(text: &str, cursor: usize) -> Text<'static> {
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut run = String::new();

    for (i, ch) in text.chars().chain(std::iter::once('\n')).enumerate() {
        if i == cursor {
            spans.push(Span::raw(std::mem::take(&mut run)));
            let under = if ch == '\n' { ' ' } else { ch };
            spans.push(Span::styled(under.to_string(), cursor_style));
            if ch != '\n' {
                continue;
            }
        }
        if ch == '\n' {
            spans.push(Span::raw(std::mem::take(&mut run)));
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            run.push(ch);
        }
    }
    Text::from(lines)
}
