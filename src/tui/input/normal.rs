//! Normal mode key handling
//!
//! Keys are mapped to actions via the config system; each action is then
//! applied to the mounted view.

use crate::app::{App, Screen};
use crate::config::Action;
use crate::editor::Edit;
use crate::route::Route;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

/// Handle key events in normal mode
pub fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        handle_action(app, action);
    }
}

/// Apply an action to the app
///
/// Actions that make no sense for the mounted view are ignored.
pub fn handle_action(app: &mut App, action: Action) {
    debug!(?action, route = %app.route(), "Handling action");
    match action {
        Action::Start => {
            if matches!(app.screen, Screen::Home) {
                app.navigate(Route::Input);
            }
        }
        Action::Submit => app.submit(),
        Action::OpenModels => app.open_model_selector(),
        Action::ClearText => {
            app.edit(|editor| {
                editor.clear();
                Edit::Accepted
            });
        }
        Action::OpenFeedback => app.open_results(Route::Feedback),
        Action::OpenRewrite => app.open_results(Route::Rewrite),
        Action::Back => app.back(),
        Action::ScrollUp => app.scroll_up(1),
        Action::ScrollDown => app.scroll_down(1),
        Action::Help => app.enter_help(),
        Action::Quit => app.should_quit = true,
    }
}
