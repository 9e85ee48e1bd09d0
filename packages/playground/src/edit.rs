//! Cursor editing of field text
//!
//! The cursor is a character index into the text, so multi-byte input never
//! splits a code point.

/// One editing keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character before the cursor
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move to the previous line, same column where possible
    Up,
    /// Move to the next line, same column where possible
    Down,
    /// Move to the start of the line
    Home,
    /// Move to the end of the line
    End,
}

/// Apply `edit` to `text` at `cursor`, moving the cursor as needed
pub fn apply(text: &mut String, cursor: &mut usize, edit: TextEdit) {
    let len = text.chars().count();
    *cursor = (*cursor).min(len);

    match edit {
        TextEdit::Insert(ch) => {
            text.insert(byte_pos(text, *cursor), ch);
            *cursor += 1;
        }
        TextEdit::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                text.remove(byte_pos(text, *cursor));
            }
        }
        TextEdit::Delete => {
            if *cursor < len {
                text.remove(byte_pos(text, *cursor));
            }
        }
        TextEdit::Left => *cursor = cursor.saturating_sub(1),
        TextEdit::Right => *cursor = (*cursor + 1).min(len),
        TextEdit::Home => *cursor = line_start(text, *cursor),
        TextEdit::End => *cursor = line_end(text, *cursor),
        TextEdit::Up => {
            let start = line_start(text, *cursor);
            if start > 0 {
                let column = *cursor - start;
                let previous = line_start(text, start - 1);
                *cursor = (previous + column).min(start - 1);
            }
        }
        TextEdit::Down => {
            let end = line_end(text, *cursor);
            if end < len {
                let column = *cursor - line_start(text, *cursor);
                let next = end + 1;
                *cursor = (next + column).min(line_end(text, next));
            }
        }
    }
}

fn byte_pos(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(pos, _)| pos)
}

fn line_start(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .enumerate()
        .filter(|(_, ch)| *ch == '\n')
        .last()
        .map_or(0, |(i, _)| i + 1)
}

fn line_end(text: &str, cursor: usize) -> usize {
    text.chars()
        .enumerate()
        .skip(cursor)
        .find(|(_, ch)| *ch == '\n')
        .map_or_else(|| text.chars().count(), |(i, _)| i)
}
