//! Terminal setup and teardown

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hashlab_common::LoggingTransformer;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Raw mode plus the alternate screen
pub fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    LoggingTransformer::log_terminal_setup("setup", Some("raw mode, alternate screen"));
    Ok(terminal)
}

/// Undo [`setup_terminal`]
pub fn cleanup_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    LoggingTransformer::log_terminal_setup("cleanup", None);
    Ok(())
}
