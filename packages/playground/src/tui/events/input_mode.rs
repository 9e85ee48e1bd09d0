//! Input mode key handling

use crate::app::{App, AppMode, InputField};
use crate::edit::TextEdit;
use crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key while editing `field`; `true` means quit
///
/// Enter submits the field. Alt+Enter inserts a newline in the JSON editors;
/// arrows, Home and End move the cursor.
pub fn handle_input_mode_key(
    app: &mut App,
    field: InputField,
    key_code: KeyCode,
    modifiers: KeyModifiers,
) -> bool {
    let keystroke = match key_code {
        KeyCode::Esc => {
            app.mode = AppMode::Normal;
            return false;
        }
        KeyCode::Char('c' | 'd') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Enter
            if modifiers.contains(KeyModifiers::ALT)
                && matches!(field, InputField::Claims | InputField::Header) =>
        {
            TextEdit::Insert('\n')
        }
        KeyCode::Enter => {
            app.mode = AppMode::Normal;
            app.submit(field);
            return false;
        }
        KeyCode::Char(c) => TextEdit::Insert(c),
        KeyCode::Backspace => TextEdit::Backspace,
        KeyCode::Delete => TextEdit::Delete,
        KeyCode::Left => TextEdit::Left,
        KeyCode::Right => TextEdit::Right,
        KeyCode::Up => TextEdit::Up,
        KeyCode::Down => TextEdit::Down,
        KeyCode::Home => TextEdit::Home,
        KeyCode::End => TextEdit::End,
        _ => return false,
    };
    app.edit(field, keystroke);
    false
}
