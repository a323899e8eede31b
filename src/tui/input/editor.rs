//! Editor key handling for the input view

use crate::app::App;
use crate::editor::{Edit, EditorState};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Feed a key to the editor.
///
/// Returns false when the key is not an editing key, so the caller can try
/// the keybindings instead.
pub fn handle_editor_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match code {
        KeyCode::Char(c) => {
            app.edit(|editor| editor.insert_char(c));
        }
        KeyCode::Enter => {
            app.edit(|editor| editor.insert_char('\n'));
        }
        KeyCode::Backspace => {
            app.edit(|editor| {
                editor.backspace();
                Edit::Accepted
            });
        }
        KeyCode::Delete => {
            app.edit(|editor| {
                editor.delete();
                Edit::Accepted
            });
        }
        KeyCode::Left => moved(app, EditorState::cursor_left),
        KeyCode::Right => moved(app, EditorState::cursor_right),
        KeyCode::Up => moved(app, EditorState::cursor_up),
        KeyCode::Down => moved(app, EditorState::cursor_down),
        KeyCode::Home => moved(app, EditorState::cursor_home),
        KeyCode::End => moved(app, EditorState::cursor_end),
        _ => return false,
    }
    true
}

fn moved(app: &mut App, f: impl FnOnce(&mut EditorState)) {
    if let Some(input) = app.input_mut() {
        f(&mut input.editor);
    }
}
