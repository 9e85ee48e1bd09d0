//! Clipboard sinks

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use hashlab_common::{ErrorKind, Result, ResultExt, err};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Somewhere copied text can go
pub trait Clipboard: Send {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// An `Environment` error when the clipboard is unreachable.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Writes OSC 52 escape sequences, which most terminals (and tmux, and SSH
/// sessions) turn into a system clipboard write
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    /// Clipboard on the controlling terminal
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    /// Clipboard writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))
            .context(ErrorKind::Environment, "terminal rejected clipboard write")
    }
}

/// In-process clipboard, for tests and headless runs
///
/// Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    unavailable: bool,
}

impl MemoryClipboard {
    /// Empty clipboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose every write fails
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            contents: Arc::default(),
            unavailable: true,
        }
    }

    /// Last text written
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.unavailable {
            return Err(err!(environment, "clipboard unavailable"));
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| err!(internal, "clipboard lock poisoned"))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}
