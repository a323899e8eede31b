//! Terminal User Interface for Clarifi

pub mod input;
mod render;

pub use render::{render, results_scroll_limit};

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, warn};

/// Raw mode and the alternate screen, restored on drop
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {e}");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        ) {
            warn!("Failed to leave alternate screen: {e}");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or polled
pub fn run(mut app: App) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let event_handler = Handler::new(app.config.poll_interval_ms);
    info!(route = %app.route(), "TUI started");

    run_loop(&mut guard.terminal, &mut app, &event_handler)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        let area = terminal.draw(|frame| render(frame, app))?.area;
        app.set_scroll_limit(results_scroll_limit(app, area));

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => input::handle_key_event(app, key.code, key.modifiers),
            Event::Paste(text) => input::handle_paste(app, &text),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}
