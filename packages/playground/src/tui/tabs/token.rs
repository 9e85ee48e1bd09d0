use super::field_widget;
use crate::app::{App, AppMode, InputField};
use hashlab_jwt::{Document, VerificationStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// JWT panel: claims and header on the left, token and status on the right
pub fn render_token_tab(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.token.session() else {
        let reason = app.token.unavailable_reason().unwrap_or("no key pair");
        let disabled = Paragraph::new(vec![
            Line::from(Span::styled(
                "Token signing is unavailable",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(reason.to_string())),
        ])
        .block(Block::default().borders(Borders::ALL).title("JWT"))
        .wrap(Wrap { trim: false });
        f.render_widget(disabled, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6), Constraint::Length(3)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(6), Constraint::Length(7)])
        .split(columns[1]);

    // Buffers while editing, the committed text otherwise
    let document = |field: InputField, doc: Document, key: char| {
        if app.mode == AppMode::Input(field) {
            field_widget(app, field, key)
        } else {
            Paragraph::new(session.editor().text(doc).to_string())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("{} [{key}]", field.label())),
                )
                .wrap(Wrap { trim: false })
        }
    };
    f.render_widget(document(InputField::Claims, Document::Claims, 'e'), left[0]);
    f.render_widget(document(InputField::Header, Document::Header, 'h'), left[1]);

    let parse_error = match app.token.parse_error() {
        Some((doc, e)) => Line::from(Span::styled(
            format!("{doc:?}: {e}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "JSON is valid",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(
        Paragraph::new(parse_error).block(Block::default().borders(Borders::ALL).title("Editor")),
        left[2],
    );

    if app.mode == AppMode::Input(InputField::Token) {
        f.render_widget(field_widget(app, InputField::Token, 't'), right[0]);
    } else {
        let token = Paragraph::new(session.token().to_string())
            .block(Block::default().borders(Borders::ALL).title("Token [t]"))
            .wrap(Wrap { trim: false });
        f.render_widget(token, right[0]);
    }

    let status = session.status();
    let color = match status {
        VerificationStatus::Verified => Color::Green,
        VerificationStatus::NotVerified => Color::Red,
        VerificationStatus::Pending => Color::Yellow,
    };
    let mut lines = vec![
        Line::from(Span::styled(
            status.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "alg {} [a] · reissue [r]",
            session.editor().header().algorithm
        )),
    ];
    if let Some(header) = app.token.token_header() {
        lines.push(Line::from(Span::styled(
            format!(
                "token alg {} · kid {}",
                header.alg,
                header.kid.as_deref().unwrap_or("-")
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(e) = session.last_failure() {
        lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Verification"))
            .wrap(Wrap { trim: false }),
        right[1],
    );

    let public_key = Paragraph::new(session.public_key().to_string())
        .block(Block::default().borders(Borders::ALL).title("Public key [K]"))
        .wrap(Wrap { trim: false });
    f.render_widget(public_key, right[2]);
}
