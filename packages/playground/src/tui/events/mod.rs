//! TUI event handling
//!
//! Split by responsibility: terminal setup and teardown, the main loop, and
//! key handling for each keyboard mode.

pub mod event_loop;
pub mod input_mode;
pub mod normal_mode;
pub mod terminal_setup;

use crate::app::App;
use crate::config::PlaygroundConfig;
use crate::notify::Osc52Clipboard;
use event_loop::run_event_loop;
use hashlab_common::LoggingTransformer;
use hashlab_key::KeyProvisioner;
use terminal_setup::{cleanup_terminal, setup_terminal};

/// Run the playground until the user quits
///
/// Must be called from inside a tokio runtime; hashing and signing run on
/// spawned tasks.
pub async fn run_tui(config: PlaygroundConfig) -> anyhow::Result<()> {
    let terminal = setup_terminal()?;

    let (mut app, events) = App::new(
        config,
        Box::new(Osc52Clipboard::stdout()),
        KeyProvisioner::global(),
    );
    app.start();

    let result = run_event_loop(terminal, app, events).await;

    let cleanup_result = || -> anyhow::Result<()> {
        use ratatui::{Terminal, backend::CrosstermBackend};

        let terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
        cleanup_terminal(terminal)
    }();

    if let Err(cleanup_err) = cleanup_result {
        LoggingTransformer::log_cleanup_warning("terminal", &*cleanup_err);
        let _ = crossterm::terminal::disable_raw_mode();
    }

    result
}
