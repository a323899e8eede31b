//! Model selector key handling

use crate::app::App;
use ratatui::crossterm::event::KeyCode;

/// Handle key events while the model picker is open
pub fn handle_model_selector_mode(app: &mut App, code: KeyCode) {
    let catalog = std::sync::Arc::clone(&app.catalog);
    match code {
        KeyCode::Enter => app.confirm_model_selection(),
        KeyCode::Esc => app.exit_mode(),
        code => {
            let Some(input) = app.input_mut() else {
                app.exit_mode();
                return;
            };
            let selector = &mut input.selector;
            match code {
                KeyCode::Up => selector.highlight_prev(&catalog),
                KeyCode::Down | KeyCode::Tab => selector.highlight_next(&catalog),
                KeyCode::Backspace => selector.handle_filter_backspace(),
                KeyCode::Char(c) => selector.handle_filter_char(c),
                _ => {}
            }
        }
    }
}
