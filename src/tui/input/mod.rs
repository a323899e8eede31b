//! Mode-specific key handling
//!
//! Overlays capture every key. Otherwise the input view's editor sees the
//! key first and anything it does not consume is looked up in the
//! configured keybindings.

mod editor;
mod normal;
mod picker;

use crate::app::{App, Mode};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

pub use normal::handle_action;

/// Handle a key event based on the current mode
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.mode {
        Mode::Help => app.exit_mode(),
        Mode::ModelSelector => picker::handle_model_selector_mode(app, code),
        Mode::Normal => {
            if app.is_editing() && editor::handle_editor_key(app, code, modifiers) {
                return;
            }
            normal::handle_normal_mode(app, code, modifiers);
        }
    }
}

/// Handle a bracketed paste
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::ModelSelector => {
            if let Some(input) = app.input_mut() {
                text.chars()
                    .filter(|c| !c.is_control())
                    .for_each(|c| input.selector.handle_filter_char(c));
            }
        }
        Mode::Normal if app.is_editing() => app.paste(text),
        Mode::Normal | Mode::Help => {}
    }
}
