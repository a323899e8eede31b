//! Event handling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Terminal tick (drives analysis polling and the spinner)
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resize
    Resize(u16, u16),
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases too
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Ok(Event::Key(key))
                }
                CrosstermEvent::Paste(text) => Ok(Event::Paste(text)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_new() {
        let handler = Handler::new(50);
        assert_eq!(handler.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_event_handler_default() {
        let handler = Handler::default();
        assert_eq!(handler.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_paste_event_keeps_text() {
        let event = Event::Paste("hello\nworld".to_string());
        assert_eq!(event.clone(), Event::Paste("hello\nworld".to_string()));
        assert_ne!(event, Event::Tick);
    }
}
