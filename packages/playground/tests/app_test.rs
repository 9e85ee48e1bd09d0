//! App state: navigation, key handling, background jobs, clipboard and toasts

use crossterm::event::{KeyCode, KeyModifiers};
use hashlab::app::{App, AppEvent, AppMode, InputField};
use hashlab::config::PlaygroundConfig;
use hashlab::notify::{MemoryClipboard, Tone};
use hashlab::panels::PanelId;
use hashlab::tui::events::input_mode::handle_input_mode_key;
use hashlab::tui::events::normal_mode::handle_normal_mode_key;
use hashlab_hashing::Argon2Params;
use hashlab_jwt::VerificationStatus;
use hashlab_key::{Curve, KeyProvisioner};
use tokio::sync::mpsc::UnboundedReceiver;

fn fast_config() -> PlaygroundConfig {
    let mut config = PlaygroundConfig::default();
    config.argon2 = Argon2Params::minimum();
    config.bcrypt.cost = 4;
    config
}

fn app_with(
    config: PlaygroundConfig,
    clipboard: MemoryClipboard,
) -> (App, UnboundedReceiver<AppEvent>) {
    App::new(config, Box::new(clipboard), &KeyProvisioner::new(Curve::P256))
}

fn type_into(app: &mut App, field: InputField, text: &str) {
    app.begin_input(field);
    app.field_mut(field).push_str(text);
    app.mode = AppMode::Normal;
}

#[test]
fn test_tab_navigation_wraps_and_keeps_state() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());
    assert_eq!(app.active, PanelId::Argon2);

    type_into(&mut app, InputField::Argon2Password, "kept");
    app.previous_panel();
    assert_eq!(app.active, PanelId::Token);
    app.next_panel();
    app.next_panel();
    assert_eq!(app.active, PanelId::Bcrypt);
    app.select(PanelId::Argon2);

    assert_eq!(app.field_text(InputField::Argon2Password), "kept");
}

#[test]
fn test_panel_ids_follow_tab_order() {
    assert_eq!(PanelId::from_digit('1'), Some(PanelId::Argon2));
    assert_eq!(PanelId::from_digit('4'), Some(PanelId::Token));
    assert_eq!(PanelId::from_digit('5'), None);
    assert_eq!(PanelId::from_digit('0'), None);
    assert_eq!(PanelId::Xxhash.to_string(), "xxHash");
}

#[tokio::test]
async fn test_argon2_hash_then_verify_through_events() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());

    type_into(&mut app, InputField::Argon2Password, "hunter2");
    app.submit(InputField::Argon2Password);
    assert!(app.argon2.is_hashing());

    let event = events.recv().await.expect("Should receive the hash");
    app.handle_event(event);
    assert!(!app.argon2.is_hashing());
    let hash = app.argon2.output().expect("Should have a hash").value().clone();
    assert!(hash.starts_with("$argon2id$"));
    assert_eq!(app.argon2.target_hash, hash);
    assert_eq!(app.toasts.latest().map(|t| t.tone()), Some(Tone::Success));

    type_into(&mut app, InputField::Argon2Candidate, "hunter2");
    app.submit(InputField::Argon2Candidate);
    let event = events.recv().await.expect("Should receive the verdict");
    app.handle_event(event);

    let verdict = app.argon2.verdict().expect("Should have a verdict");
    assert!(verdict.as_ref().expect("Hash should be usable").value().is_verified());
}

#[tokio::test]
async fn test_bcrypt_wrong_password_is_not_verified() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());
    app.select(PanelId::Bcrypt);

    type_into(&mut app, InputField::BcryptPassword, "correct horse");
    app.hash(PanelId::Bcrypt);
    let event = events.recv().await.expect("Should receive the hash");
    app.handle_event(event);
    assert!(app.bcrypt.target_hash.starts_with("$2b$04$"));

    type_into(&mut app, InputField::BcryptCandidate, "battery staple");
    app.verify(PanelId::Bcrypt);
    let event = events.recv().await.expect("Should receive the verdict");
    app.handle_event(event);

    let verdict = app.bcrypt.verdict().expect("Should have a verdict");
    assert!(!verdict.as_ref().expect("Hash should be usable").value().is_verified());
}

#[tokio::test]
async fn test_empty_password_does_not_start_a_job() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());

    app.submit(InputField::Argon2Password);
    assert!(!app.argon2.is_hashing());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_failed_hash_keeps_previous_output() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());

    type_into(&mut app, InputField::BcryptPassword, "first");
    app.hash(PanelId::Bcrypt);
    app.handle_event(events.recv().await.expect("Should receive the hash"));
    let first = app.bcrypt.output().expect("Should have a hash").value().clone();

    app.field_mut(InputField::BcryptCost).clear();
    app.field_mut(InputField::BcryptCost).push_str("99");
    app.hash(PanelId::Bcrypt);
    app.handle_event(events.recv().await.expect("Should receive the failure"));

    assert!(app.bcrypt.last_error().is_some());
    assert_eq!(app.bcrypt.output().map(|h| h.value().clone()), Some(first));
    assert_eq!(app.toasts.latest().map(|t| t.tone()), Some(Tone::Error));
}

#[tokio::test]
async fn test_startup_token_verifies() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());
    app.start();

    let event = events.recv().await.expect("Should receive the first cycle");
    app.handle_event(event);

    let session = app.token.session().expect("Token panel should be enabled");
    assert_eq!(session.status(), VerificationStatus::Verified);
    assert_eq!(session.token().split('.').count(), 3);
}

#[tokio::test]
async fn test_invalid_claims_edit_warns_and_keeps_token() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());
    app.start();
    app.handle_event(events.recv().await.expect("Should receive the first cycle"));
    let token = app.token.session().expect("enabled").token().to_string();

    app.begin_input(InputField::Claims);
    app.field_mut(InputField::Claims).push_str("{ not json");
    app.mode = AppMode::Normal;
    app.submit(InputField::Claims);

    assert!(app.token.parse_error().is_some());
    assert_eq!(app.toasts.latest().map(|t| t.tone()), Some(Tone::Warning));
    assert_eq!(app.token.session().expect("enabled").token(), token);
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_pasted_garbage_is_not_verified() {
    let (mut app, mut events) = app_with(fast_config(), MemoryClipboard::new());
    app.start();
    app.handle_event(events.recv().await.expect("Should receive the first cycle"));

    app.begin_input(InputField::Token);
    app.field_mut(InputField::Token).clear();
    app.field_mut(InputField::Token).push_str("a.b.c");
    app.mode = AppMode::Normal;
    app.submit(InputField::Token);
    app.handle_event(events.recv().await.expect("Should receive the verify"));

    let session = app.token.session().expect("enabled");
    assert_eq!(session.token(), "a.b.c");
    assert_eq!(session.status(), VerificationStatus::NotVerified);
}

#[test]
fn test_copy_digest_to_clipboard() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _events) = app_with(fast_config(), clipboard.clone());
    app.select(PanelId::Xxhash);

    type_into(&mut app, InputField::XxhashInput, "hello");
    app.submit(InputField::XxhashInput);
    app.copy_current();

    let expected = app.xxhash.output().expect("Should have a digest").value().to_hex();
    assert_eq!(clipboard.contents(), Some(expected));
    assert_eq!(app.toasts.latest().map(|t| t.title()), Some("Copied to clipboard"));
}

#[test]
fn test_copy_with_nothing_to_copy_warns() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _events) = app_with(fast_config(), clipboard.clone());

    app.copy_current();

    assert_eq!(clipboard.contents(), None);
    assert_eq!(app.toasts.latest().map(|t| t.tone()), Some(Tone::Warning));
}

#[test]
fn test_clipboard_failure_is_silent_by_default() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::unavailable());
    app.select(PanelId::Xxhash);
    type_into(&mut app, InputField::XxhashInput, "hello");
    app.submit(InputField::XxhashInput);

    app.copy_current();

    assert!(app.toasts.is_empty());
}

#[test]
fn test_clipboard_failure_can_be_surfaced() {
    let mut config = fast_config();
    config.surface_clipboard_errors = true;
    let (mut app, _events) = app_with(config, MemoryClipboard::unavailable());
    app.select(PanelId::Xxhash);
    type_into(&mut app, InputField::XxhashInput, "hello");
    app.submit(InputField::XxhashInput);

    app.copy_current();

    assert_eq!(app.toasts.latest().map(|t| t.tone()), Some(Tone::Error));
}

#[test]
fn test_copy_public_key() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _events) = app_with(fast_config(), clipboard.clone());

    app.copy_public_key();

    let copied = clipboard.contents().expect("Should copy the key");
    assert!(copied.starts_with("-----BEGIN PUBLIC KEY-----"));
}

#[test]
fn test_secret_fields_are_masked() {
    assert!(InputField::Argon2Password.is_secret());
    assert!(InputField::BcryptCandidate.is_secret());
    assert!(!InputField::Argon2Hash.is_secret());
    assert!(!InputField::Claims.is_secret());
    assert_eq!(InputField::Token.panel(), PanelId::Token);
}

fn press(app: &mut App, code: KeyCode) -> bool {
    press_with(app, code, KeyModifiers::NONE)
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match app.mode {
        AppMode::Normal => handle_normal_mode_key(app, code, modifiers),
        AppMode::Input(field) => handle_input_mode_key(app, field, code, modifiers),
    }
}

fn type_keys(app: &mut App, text: &str) {
    for ch in text.chars() {
        assert!(!press(app, KeyCode::Char(ch)));
    }
}

#[test]
fn test_panel_switching_keys() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());

    assert!(!press(&mut app, KeyCode::Tab));
    assert_eq!(app.active, PanelId::Bcrypt);
    assert!(!press_with(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT));
    assert_eq!(app.active, PanelId::Argon2);
    assert!(!press(&mut app, KeyCode::Char('3')));
    assert_eq!(app.active, PanelId::Xxhash);
    assert!(!press(&mut app, KeyCode::Char('4')));
    assert_eq!(app.active, PanelId::Token);
    assert!(!press(&mut app, KeyCode::Char('1')));
    assert_eq!(app.active, PanelId::Argon2);
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_quit_keys() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());

    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(press_with(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL));

    // Plain `c` on the Argon2 panel edits the candidate instead
    assert!(!press(&mut app, KeyCode::Char('c')));
    assert_eq!(app.mode, AppMode::Input(InputField::Argon2Candidate));

    // Ctrl-C still quits while editing, and `q` is just text
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.field_text(InputField::Argon2Candidate), "q");
    assert!(press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn test_enter_submits_and_leaves_input_mode() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());
    press(&mut app, KeyCode::Char('3'));

    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.mode, AppMode::Input(InputField::XxhashInput));
    type_keys(&mut app, "helo");
    press(&mut app, KeyCode::Left);
    type_keys(&mut app, "l");
    assert_eq!(app.field_text(InputField::XxhashInput), "hello");
    assert_eq!(app.cursor(), 4);

    assert!(!press(&mut app, KeyCode::Enter));
    assert_eq!(app.mode, AppMode::Normal);
    assert!(app.xxhash.output().is_some());
}

#[test]
fn test_escape_leaves_input_without_submitting() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());
    press(&mut app, KeyCode::Char('3'));

    press(&mut app, KeyCode::Char('i'));
    type_keys(&mut app, "abc");
    press(&mut app, KeyCode::Backspace);
    assert!(!press(&mut app, KeyCode::Esc));

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.field_text(InputField::XxhashInput), "ab");
    assert!(app.xxhash.output().is_none());
}

#[test]
fn test_alt_enter_inserts_newline_only_in_json_editors() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());
    press(&mut app, KeyCode::Char('4'));

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.mode, AppMode::Input(InputField::Claims));
    let before = app.field_text(InputField::Claims).to_string();
    assert!(!before.is_empty());

    press_with(&mut app, KeyCode::Enter, KeyModifiers::ALT);
    assert_eq!(app.mode, AppMode::Input(InputField::Claims));
    assert_eq!(app.field_text(InputField::Claims), format!("{before}\n"));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('i'));
    type_keys(&mut app, "x");
    press_with(&mut app, KeyCode::Enter, KeyModifiers::ALT);
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.field_text(InputField::XxhashInput), "x");
}

#[test]
fn test_claims_can_be_edited_mid_document() {
    let (mut app, _events) = app_with(fast_config(), MemoryClipboard::new());
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('e'));

    let before = app.field_text(InputField::Claims).to_string();
    let last_line_start = before.rfind('\n').map_or(0, |i| i + 1);

    // Cursor starts at the end; Home lands at the start of the last line
    press(&mut app, KeyCode::Home);
    assert_eq!(app.cursor(), before[..last_line_start].chars().count());
    press(&mut app, KeyCode::Up);
    type_keys(&mut app, "Z");

    let after = app.field_text(InputField::Claims);
    assert!(after.ends_with(&before[last_line_start..]));
    assert_eq!(after.chars().count(), before.chars().count() + 1);
    assert_ne!(after, before);
    assert!(!after.ends_with('Z'));
}

#[test]
fn test_copy_key_copies_current_result() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _events) = app_with(fast_config(), clipboard.clone());
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('i'));
    type_keys(&mut app, "hello");
    press(&mut app, KeyCode::Enter);

    assert!(!press(&mut app, KeyCode::Char('y')));

    let expected = app.xxhash.output().expect("Should have a digest").value().to_hex();
    assert_eq!(clipboard.contents(), Some(expected));
}
