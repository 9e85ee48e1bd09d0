//! Normal mode key handling

use crate::app::{App, InputField};
use crate::panels::PanelId;
use crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key outside of text entry; `true` means quit
pub fn handle_normal_mode_key(app: &mut App, key_code: KeyCode, modifiers: KeyModifiers) -> bool {
    match key_code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c' | 'd') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Tab => app.next_panel(),
        KeyCode::BackTab => app.previous_panel(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(panel) = PanelId::from_digit(c) {
                app.select(panel);
            }
        }
        KeyCode::Char('y') => app.copy_current(),
        _ => match app.active {
            PanelId::Argon2 => argon2_key(app, key_code),
            PanelId::Bcrypt => bcrypt_key(app, key_code),
            PanelId::Xxhash => xxhash_key(app, key_code),
            PanelId::Token => token_key(app, key_code),
        },
    }
    false
}

fn argon2_key(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('p') => app.begin_input(InputField::Argon2Password),
        KeyCode::Char('c') => app.begin_input(InputField::Argon2Candidate),
        KeyCode::Char('h') => app.begin_input(InputField::Argon2Hash),
        KeyCode::Char('t') => app.begin_input(InputField::Argon2TimeCost),
        KeyCode::Char('l') => app.begin_input(InputField::Argon2Parallelism),
        KeyCode::Char('m') => app.begin_input(InputField::Argon2MemoryCost),
        KeyCode::Char('v') => app.argon2.form.cycle_variant(),
        KeyCode::Enter => app.hash(PanelId::Argon2),
        KeyCode::Char('V') => app.verify(PanelId::Argon2),
        _ => {}
    }
}

fn bcrypt_key(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('p') => app.begin_input(InputField::BcryptPassword),
        KeyCode::Char('c') => app.begin_input(InputField::BcryptCandidate),
        KeyCode::Char('h') => app.begin_input(InputField::BcryptHash),
        KeyCode::Char('k') => app.begin_input(InputField::BcryptCost),
        KeyCode::Enter => app.hash(PanelId::Bcrypt),
        KeyCode::Char('V') => app.verify(PanelId::Bcrypt),
        _ => {}
    }
}

fn xxhash_key(app: &mut App, key_code: KeyCode) {
    let failure_mode = app.config().failure_mode;
    match key_code {
        KeyCode::Char('i') => app.begin_input(InputField::XxhashInput),
        KeyCode::Char('s') => app.begin_input(InputField::XxhashSeed),
        KeyCode::Char('v') => app.xxhash.cycle_variant(failure_mode),
        KeyCode::Enter => app.xxhash.compute(failure_mode),
        _ => {}
    }
}

fn token_key(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('e') => app.begin_input(InputField::Claims),
        KeyCode::Char('h') => app.begin_input(InputField::Header),
        KeyCode::Char('t') => app.begin_input(InputField::Token),
        KeyCode::Char('a') => {
            if let Some(cycle) = app.token.cycle_algorithm() {
                app.dispatch(cycle);
            }
        }
        KeyCode::Char('r') => {
            if let Some(cycle) = app.token.reissue() {
                app.dispatch(cycle);
            }
        }
        KeyCode::Char('K') => app.copy_public_key(),
        _ => {}
    }
}
