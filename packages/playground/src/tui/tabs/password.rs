use super::field_widget;
use crate::app::{App, InputField};
use crate::panels::{PanelId, PasswordForm, PasswordPanel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Argon2 or bcrypt panel
pub fn render_password_tab(f: &mut Frame, app: &App, panel: PanelId, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Cost fields
            Constraint::Length(3), // Password
            Constraint::Min(4),    // Output
            Constraint::Length(3), // Candidate
            Constraint::Length(3), // Hash to check
            Constraint::Length(3), // Verdict
        ])
        .split(area);

    let (fields, password, candidate, hash) = match panel {
        PanelId::Bcrypt => (
            vec![(InputField::BcryptCost, 'k')],
            InputField::BcryptPassword,
            InputField::BcryptCandidate,
            InputField::BcryptHash,
        ),
        _ => (
            vec![
                (InputField::Argon2TimeCost, 't'),
                (InputField::Argon2Parallelism, 'l'),
                (InputField::Argon2MemoryCost, 'm'),
            ],
            InputField::Argon2Password,
            InputField::Argon2Candidate,
            InputField::Argon2Hash,
        ),
    };

    render_cost_row(f, app, panel, &fields, chunks[0]);
    f.render_widget(field_widget(app, password, 'p'), chunks[1]);
    f.render_widget(field_widget(app, candidate, 'c'), chunks[3]);
    f.render_widget(field_widget(app, hash, 'h'), chunks[4]);

    match panel {
        PanelId::Bcrypt => render_results(f, &app.bcrypt, chunks[2], chunks[5]),
        _ => render_results(f, &app.argon2, chunks[2], chunks[5]),
    }
}

fn render_cost_row(
    f: &mut Frame,
    app: &App,
    panel: PanelId,
    fields: &[(InputField, char)],
    area: Rect,
) {
    let variant_slot = usize::from(panel == PanelId::Argon2);
    let count = fields.len() + variant_slot;
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    if variant_slot == 1 {
        let variant = Paragraph::new(app.argon2.form.variant.to_string())
            .block(Block::default().borders(Borders::ALL).title("Variant [v]"));
        f.render_widget(variant, cells[0]);
    }
    for (i, (field, key)) in fields.iter().enumerate() {
        f.render_widget(field_widget(app, *field, *key), cells[i + variant_slot]);
    }
}

fn render_results<F: PasswordForm>(
    f: &mut Frame,
    panel: &PasswordPanel<F>,
    output_area: Rect,
    verdict_area: Rect,
) {
    let mut lines = Vec::new();
    if panel.is_hashing() {
        lines.push(Line::from(Span::styled(
            "Hashing...",
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(output) = panel.output() {
        lines.push(Line::from(Span::raw(output.value().clone())));
        lines.push(Line::from(Span::styled(
            format!("{} ms", output.elapsed_ms()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(e) = panel.last_error() {
        lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let title = if panel.can_hash() {
        "Hash [Enter]"
    } else {
        "Hash"
    };
    let output = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(output, output_area);

    let verdict = if panel.is_verifying() {
        Span::styled("Checking...", Style::default().fg(Color::Yellow))
    } else {
        match panel.verdict() {
            Some(Ok(checked)) if checked.value().is_verified() => Span::styled(
                format!("Password matches ({} ms)", checked.elapsed_ms()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(Ok(_)) => Span::styled(
                "Password does not match",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Some(Err(e)) => Span::styled(
                format!("Cannot check: {e}"),
                Style::default().fg(Color::Red),
            ),
            None => Span::raw(""),
        }
    };
    let title = if panel.can_verify() {
        "Verify [V]"
    } else {
        "Verify"
    };
    let verdict =
        Paragraph::new(Line::from(verdict)).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(verdict, verdict_area);
}
