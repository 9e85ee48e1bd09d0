//! Main event loop

use super::input_mode::handle_input_mode_key;
use super::normal_mode::handle_normal_mode_key;
use crate::app::{App, AppEvent, AppMode};
use crate::tui::ui::ui;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;

/// Draw, fold in finished background work, handle one key, repeat
pub async fn run_event_loop(
    mut terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    mut events: UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let tick_rate = app.config().tick_rate();
    let mut last_tick = Instant::now();

    loop {
        loop {
            match events.try_recv() {
                Ok(event) => app.handle_event(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        terminal.draw(|f| ui(f, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Polling blocks; keep it off the runtime's worker so spawned jobs run
        let ready = tokio::task::block_in_place(|| event::poll(timeout))?;
        if ready
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let should_exit = match app.mode {
                AppMode::Normal => handle_normal_mode_key(&mut app, key.code, key.modifiers),
                AppMode::Input(field) => {
                    handle_input_mode_key(&mut app, field, key.code, key.modifiers)
                }
            };

            if should_exit || app.should_quit() {
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.tick();
        }
    }

    Ok(())
}
