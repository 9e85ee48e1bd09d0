//! Toast queue and clipboards

use hashlab::notify::{Clipboard, MemoryClipboard, Osc52Clipboard, Toast, ToastQueue, Tone};
use hashlab_common::ErrorKind;
use std::time::{Duration, Instant};

#[test]
fn test_toasts_expire_after_ttl() {
    let mut queue = ToastQueue::new(Duration::from_millis(100));
    queue.push(Toast::success("Copied to clipboard"));
    assert_eq!(queue.len(), 1);

    queue.expire_at(Instant::now());
    assert_eq!(queue.len(), 1);

    queue.expire_at(Instant::now() + Duration::from_millis(150));
    assert!(queue.is_empty());
}

#[test]
fn test_queue_drops_oldest_when_full() {
    let mut queue = ToastQueue::new(Duration::from_secs(60));
    for i in 0..(ToastQueue::DEFAULT_CAPACITY + 2) {
        queue.push(Toast::new(format!("toast {i}"), Tone::Info));
    }

    assert_eq!(queue.len(), ToastQueue::DEFAULT_CAPACITY);
    let titles: Vec<&str> = queue.iter().map(Toast::title).collect();
    assert_eq!(titles.first().copied(), Some("toast 2"));
    assert_eq!(
        queue.latest().map(Toast::title),
        Some(format!("toast {}", ToastQueue::DEFAULT_CAPACITY + 1).as_str())
    );
}

#[test]
fn test_toast_description() {
    let toast = Toast::error("Copy failed").with_description("clipboard unavailable");
    assert_eq!(toast.tone(), Tone::Error);
    assert_eq!(toast.description(), Some("clipboard unavailable"));
    assert_eq!(Toast::warning("x").description(), None);
}

#[test]
fn test_memory_clipboard_shares_contents() {
    let clipboard = MemoryClipboard::new();
    let mut writer = clipboard.clone();
    writer.set_text("copied").expect("Write should succeed");
    assert_eq!(clipboard.contents(), Some("copied".to_string()));
}

#[test]
fn test_unavailable_clipboard_is_an_environment_error() {
    let mut clipboard = MemoryClipboard::unavailable();
    let err = clipboard.set_text("x").expect_err("Write should fail");
    assert_eq!(err.kind(), ErrorKind::Environment);
}

#[test]
fn test_osc52_writes_escape_sequence() {
    let mut clipboard = Osc52Clipboard::new(Vec::new());
    clipboard.set_text("hi").expect("Write should succeed");

    let written = String::from_utf8(clipboard.into_inner()).expect("Should be UTF-8");
    // "hi" in base64
    assert!(written.starts_with("\x1b]52;"));
    assert!(written.contains("aGk="));
}
