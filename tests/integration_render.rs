//! Integration tests for TUI rendering
//!
//! Uses ratatui's `TestBackend` to drive the app through key events and check
//! what each view draws without a real terminal.

use std::sync::Arc;

use clarifi::analysis::{AnalysisError, AnalysisRequest, Analyzer};
use clarifi::app::{App, Mode};
use clarifi::tui::input::{handle_key_event, handle_paste};
use clarifi::tui::render;
use clarifi::{Config, ModelCatalog, Route};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug)]
struct NoDelay;

impl Analyzer for NoDelay {
    fn analyze(&self, _request: &AnalysisRequest) -> Result<(), AnalysisError> {
        Ok(())
    }
}

fn create_test_app(config: Config) -> App {
    App::with_analyzer(config, ModelCatalog::builtin(), Arc::new(NoDelay))
}

fn screen(app: &App) -> Result<String, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
    terminal.draw(|frame| render(frame, app))?;
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    Ok(out)
}

fn key(app: &mut App, code: KeyCode) {
    handle_key_event(app, code, KeyModifiers::NONE);
}

#[test]
fn test_home_to_input_flow() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(Config::default());
    assert!(screen(&app)?.contains("Get Started"));

    key(&mut app, KeyCode::Enter);
    let input = screen(&app)?;
    assert!(input.contains("Enter Your Text"));
    assert!(input.contains("0 / 10000 characters"));
    Ok(())
}

#[test]
fn test_typing_updates_counter() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(Config::default());
    app.navigate(Route::Input);
    for c in "Hi there".chars() {
        key(&mut app, KeyCode::Char(c));
    }
    handle_paste(&mut app, ", friend");

    let out = screen(&app)?;
    assert!(out.contains("Hi there, friend"));
    assert!(out.contains("16 / 10000 characters"));
    assert!(!out.contains("Type or paste your text here"));
    Ok(())
}

#[test]
fn test_counter_stops_at_cap() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        max_length: 4,
        ..Config::default()
    };
    let mut app = create_test_app(config);
    app.navigate(Route::Input);
    for c in "abcdef".chars() {
        key(&mut app, KeyCode::Char(c));
    }
    assert!(screen(&app)?.contains("4 / 4 characters"));
    Ok(())
}

#[test]
fn test_model_picker_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(Config::default());
    app.navigate(Route::Input);

    key(&mut app, KeyCode::Tab);
    assert_eq!(app.mode, Mode::ModelSelector);
    let picker = screen(&app)?;
    assert!(picker.contains("Filter:"));
    assert!(picker.contains("Claude 3 Sonnet"));

    for c in "sonnet".chars() {
        key(&mut app, KeyCode::Char(c));
    }
    key(&mut app, KeyCode::Enter);

    let out = screen(&app)?;
    assert!(out.contains("Claude 3 Sonnet  Anthropic"));
    assert!(out.contains("₹6.00 / 1k tokens"));
    assert!(out.contains("Best for: Balanced speed/quality"));
    Ok(())
}

#[test]
fn test_results_views_echo_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(Config::default());
    app.navigate("/rewrite/session-42".parse()?);
    let out = screen(&app)?;
    assert!(out.contains("Rewrite"));
    assert!(out.contains("Session ID: session-42"));
    assert!(out.contains("Rewrite page content will go here"));

    app.navigate("/feedback/session-42".parse()?);
    assert!(screen(&app)?.contains("Feedback page content will go here"));
    Ok(())
}

#[test]
fn test_help_overlay_lists_configured_keys() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config
        .keys
        .set("Ctrl+g", clarifi::config::Action::Submit);
    let mut app = create_test_app(config);
    key(&mut app, KeyCode::F(1));

    let out = screen(&app)?;
    assert!(out.contains("Keybindings"));
    assert!(out.contains("Ctrl+g/Ctrl+s"));
    Ok(())
}
