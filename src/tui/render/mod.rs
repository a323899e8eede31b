//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `chrome`: Navbar, status bar and footer
//! - `screens`: One renderer per view
//! - `modals`: Overlay rendering

mod chrome;
mod colors;
mod modals;
mod screens;

use crate::app::{App, Mode, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Rows taken by the navbar, status bar, footer and the results border
const RESULTS_CHROME_ROWS: u16 = 5;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    chrome::render_navbar(frame, app, chunks[0]);
    match &app.screen {
        Screen::Home => screens::render_home(frame, app, chunks[1]),
        Screen::Input(input) => screens::render_input(frame, app, input, chunks[1]),
        Screen::Feedback(session) => {
            screens::render_results(frame, app, screens::Results::Feedback, session, chunks[1]);
        }
        Screen::Rewrite(session) => {
            screens::render_results(frame, app, screens::Results::Rewrite, session, chunks[1]);
        }
    }
    chrome::render_status_bar(frame, app, chunks[2]);
    chrome::render_footer(frame, chunks[3]);

    match app.mode {
        Mode::Normal => {}
        Mode::ModelSelector => modals::render_model_selector_overlay(frame, app),
        Mode::Help => modals::render_help_overlay(frame, app),
    }
}

/// Furthest the mounted results view can scroll in a frame of `area`
///
/// Zero for views that do not scroll.
#[must_use]
pub fn results_scroll_limit(app: &App, area: Rect) -> u16 {
    let kind = match app.screen {
        Screen::Feedback(_) => screens::Results::Feedback,
        Screen::Rewrite(_) => screens::Results::Rewrite,
        Screen::Home | Screen::Input(_) => return 0,
    };
    let visible = area.height.saturating_sub(RESULTS_CHROME_ROWS);
    screens::results_height(kind).saturating_sub(visible)
}

#[cfg(test)]
mod tests;
