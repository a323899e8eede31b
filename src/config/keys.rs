//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Leave the landing view for the editor
    Start,
    /// Analyze the current text
    Submit,
    /// Open the model selector
    OpenModels,
    /// Clear the editor
    ClearText,
    /// Open the feedback view for the last session
    OpenFeedback,
    /// Open the rewrite view for the last session
    OpenRewrite,
    /// Go back to the previous view
    Back,
    /// Scroll up in a results view
    ScrollUp,
    /// Scroll down in a results view
    ScrollDown,
    /// Show help
    Help,
    /// Quit application
    Quit,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Writing and analysis actions
    Writing,
    /// Moving between views
    Navigation,
    /// Miscellaneous actions
    Other,
}

impl ActionGroup {
    /// Get the display title for this group
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Writing => "Writing",
            Self::Navigation => "Navigation",
            Self::Other => "Other",
        }
    }
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Start => "Get started",
            Self::Submit => "Analyze text",
            Self::OpenModels => "Select model",
            Self::ClearText => "Clear text",
            Self::OpenFeedback => "Open feedback for last analysis",
            Self::OpenRewrite => "Open rewrite for last analysis",
            Self::Back => "Back",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::Help => "Show this help",
            Self::Quit => "Quit",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::Submit | Self::OpenModels | Self::ClearText => ActionGroup::Writing,
            Self::Start
            | Self::OpenFeedback
            | Self::OpenRewrite
            | Self::Back
            | Self::ScrollUp
            | Self::ScrollDown => ActionGroup::Navigation,
            Self::Help | Self::Quit => ActionGroup::Other,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Writing
        Self::Submit,
        Self::OpenModels,
        Self::ClearText,
        // Navigation
        Self::Start,
        Self::OpenFeedback,
        Self::OpenRewrite,
        Self::Back,
        Self::ScrollUp,
        Self::ScrollDown,
        // Other
        Self::Help,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            ("Enter", Action::Start),
            ("Ctrl+s", Action::Submit),
            ("Tab", Action::OpenModels),
            ("Ctrl+o", Action::OpenModels),
            ("Ctrl+l", Action::ClearText),
            ("Ctrl+f", Action::OpenFeedback),
            ("Ctrl+r", Action::OpenRewrite),
            ("Esc", Action::Back),
            ("Up", Action::ScrollUp),
            ("k", Action::ScrollUp),
            ("Down", Action::ScrollDown),
            ("j", Action::ScrollDown),
            ("F1", Action::Help),
            ("?", Action::Help),
            ("q", Action::Quit),
            ("Ctrl+c", Action::Quit),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_string(), action))
        .collect();

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action, simplest keys first
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter_map(|(k, &v)| (v == action).then(|| k.clone()))
            .collect();
        keys.sort_by(|a, b| {
            let a_modified = a.contains('+');
            let b_modified = b.contains('+');
            a_modified
                .cmp(&b_modified)
                .then_with(|| a.len().cmp(&b.len()))
                .then_with(|| a.cmp(b))
        });
        keys
    }

    /// Format key(s) for an action for display (e.g., "Tab/Ctrl+o")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        self.keys_for_action(action).join("/")
    }

    /// Generate a formatted help line for an action: "  keys    description"
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self.format_keys(action);
        format!("  {keys:<14} {}", action.description())
    }

    /// Generate status bar hint text for the given actions
    ///
    /// Prefers a binding with a modifier so hints stay valid while typing.
    #[must_use]
    pub fn status_hints(&self, hints: &[(Action, &str)]) -> String {
        hints
            .iter()
            .map(|(action, label)| {
                let keys = self.keys_for_action(*action);
                let key = keys
                    .iter()
                    .find(|k| k.contains('+') || k.len() > 1)
                    .or_else(|| keys.first())
                    .cloned()
                    .unwrap_or_default();
                format!("[{key}] {label}")
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
