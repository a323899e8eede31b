use super::*;
use crate::analysis::{AnalysisError, AnalysisRequest, Analyzer};
use crate::catalog::ModelCatalog;
use crate::config::Config;
use crate::route::{Route, SessionId};
use crate::submission::SubmitError;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::sync::Arc;

#[derive(Debug)]
struct Failing;

impl Analyzer for Failing {
    fn analyze(&self, _request: &AnalysisRequest) -> Result<(), AnalysisError> {
        Err(AnalysisError::Failed("offline".to_string()))
    }
}

fn create_test_app() -> App {
    App::with_analyzer(Config::default(), ModelCatalog::builtin(), Arc::new(Failing))
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn draw(app: &App, width: u16, height: u16) -> Result<String, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(buffer_text(terminal.backend().buffer()))
}

#[test]
fn test_render_home() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app();
    let screen = draw(&app, 80, 24)?;

    assert!(screen.contains("Clarifi"));
    assert!(screen.contains("Refine your writing with AI-powered feedback and suggestions"));
    assert!(screen.contains("Get Started"));
    assert!(screen.contains("Clarifi. All rights reserved."));
    assert!(screen.contains("Improve your writing with AI"));
    assert!(screen.contains("[Enter] Write"));
    Ok(())
}

#[test]
fn test_render_input_empty() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Input);
    let screen = draw(&app, 100, 30)?;

    assert!(screen.contains("Enter Your Text"));
    assert!(screen.contains("Type or paste your text here for analysis..."));
    assert!(screen.contains("Plain text formatting"));
    assert!(screen.contains("0 / 10000 characters"));
    assert!(screen.contains("Select Model"));
    assert!(screen.contains("No model selected"));
    assert!(screen.contains("Analyze Text"));
    assert!(screen.contains("[Ctrl+s] analyze"));
    Ok(())
}

#[test]
fn test_render_input_with_model_card() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Input);
    app.edit(|editor| editor.set_text("Hello there"));
    app.select_model("gpt-3.5-turbo");
    let screen = draw(&app, 100, 30)?;

    assert!(screen.contains("Hello there"));
    assert!(screen.contains("11 / 10000 characters"));
    assert!(screen.contains("GPT-3.5 Turbo"));
    assert!(screen.contains("₹1.50"));
    assert!(screen.contains("★★★★★"));
    assert!(screen.contains("★★★☆☆"));
    assert!(screen.contains("Best for:"));
    Ok(())
}

#[test]
fn test_counter_colour_follows_band() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        max_length: 10,
        ..Config::default()
    };
    let mut app = App::with_analyzer(config, ModelCatalog::builtin(), Arc::new(Failing));
    app.navigate(Route::Input);

    for (text, expected) in [
        ("abcdef", colors::ACCENT_POSITIVE),
        ("abcdefg", colors::ACCENT_WARNING),
        ("abcdefghi", colors::ACCENT_NEGATIVE),
    ] {
        app.edit(|editor| editor.set_text(text));
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        terminal.draw(|frame| render(frame, &app))?;
        let buffer = terminal.backend().buffer();

        let counter = format!("{} / 10 characters", text.len());
        let row = (0..buffer.area.height)
            .find(|&y| {
                let line: String = (0..buffer.area.width)
                    .filter_map(|x| buffer.cell((x, y)).map(ratatui::buffer::Cell::symbol))
                    .collect();
                line.contains(&counter)
            })
            .ok_or("counter not rendered")?;
        let fg = (0..buffer.area.width)
            .rev()
            .filter_map(|x| buffer.cell((x, row)))
            .find(|cell| cell.symbol() == "s")
            .map(|cell| cell.fg);
        assert_eq!(fg, Some(expected), "band colour for {text:?}");
    }
    Ok(())
}

#[test]
fn test_render_inline_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Input);
    app.edit(|editor| editor.set_text("Some text"));
    app.select_model("gpt-4");
    app.submit();

    let completion = app.input_mut().and_then(|input| input.submission.wait());
    assert!(completion.is_some());

    let screen = draw(&app, 100, 30)?;
    assert!(screen.contains(&SubmitError::AnalysisFailed.to_string()));
    Ok(())
}

#[test]
fn test_render_busy_button() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(Debug)]
    struct Slow;
    impl Analyzer for Slow {
        fn analyze(&self, _request: &AnalysisRequest) -> Result<(), AnalysisError> {
            std::thread::sleep(std::time::Duration::from_millis(200));
            Ok(())
        }
    }

    let mut app = App::with_analyzer(Config::default(), ModelCatalog::builtin(), Arc::new(Slow));
    app.navigate(Route::Input);
    app.edit(|editor| editor.set_text("Some text"));
    app.select_model("gpt-4");
    app.submit();

    let screen = draw(&app, 100, 30)?;
    assert!(screen.contains("Analyzing..."));
    assert!(!screen.contains("Analyze Text"));

    let _ = app.input_mut().and_then(|input| input.submission.wait());
    Ok(())
}

#[test]
fn test_render_feedback() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Feedback(SessionId::new("abc-123")));
    let screen = draw(&app, 80, 40)?;

    assert!(screen.contains("Feedback"));
    assert!(screen.contains("Session ID: abc-123"));
    assert!(screen.contains("Feedback page content will go here"));
    assert!(screen.contains('█'));
    Ok(())
}

#[test]
fn test_render_rewrite_scrolls() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Rewrite(SessionId::new("xyz")));
    let screen = draw(&app, 80, 24)?;
    assert!(screen.contains("Rewrite page content will go here"));

    app.scroll_down(3);
    let screen = draw(&app, 80, 24)?;
    assert!(!screen.contains("Session ID: xyz"));
    Ok(())
}

#[test]
fn test_results_scroll_limit_follows_frame_height() {
    let mut app = create_test_app();
    let frame = Rect::new(0, 0, 80, 24);
    assert_eq!(results_scroll_limit(&app, frame), 0);

    app.navigate(Route::Feedback(SessionId::new("abc")));
    let content = screens::results_height(screens::Results::Feedback);
    assert_eq!(results_scroll_limit(&app, frame), content - 19);
    assert_eq!(results_scroll_limit(&app, Rect::new(0, 0, 80, 200)), 0);
}

#[test]
fn test_render_feedback_never_scrolls_past_content() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Feedback(SessionId::new("abc")));
    app.set_scroll_limit(results_scroll_limit(&app, Rect::new(0, 0, 80, 24)));
    for _ in 0..200 {
        app.scroll_down(1);
    }

    let screen = draw(&app, 80, 24)?;
    assert!(screen.contains('█'));
    Ok(())
}

#[test]
fn test_cursor_after_wide_text() -> Result<(), Box<dyn std::error::Error>> {
    let cursor_x = |text: &str| -> Result<u16, Box<dyn std::error::Error>> {
        let mut app = create_test_app();
        app.navigate(Route::Input);
        app.edit(|editor| editor.set_text(text));
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
        terminal.draw(|frame| render(frame, &app))?;
        Ok(terminal.get_cursor_position()?.x)
    };

    assert_eq!(cursor_x("日本")? - cursor_x("ab")?, 2);
    Ok(())
}

#[test]
fn test_render_help_overlay() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.enter_help();
    let screen = draw(&app, 80, 30)?;

    assert!(screen.contains("Keybindings"));
    assert!(screen.contains("Writing"));
    assert!(screen.contains("Navigation"));
    assert!(screen.contains("Ctrl+s"));
    assert!(screen.contains("Analyze text"));
    Ok(())
}

#[test]
fn test_render_model_selector_grouped() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Input);
    app.select_model("claude-3-opus");
    app.open_model_selector();
    let screen = draw(&app, 100, 30)?;

    let openai = screen.find("OpenAI").ok_or("OpenAI header missing")?;
    let anthropic = screen.find("Anthropic").ok_or("Anthropic header missing")?;
    assert!(openai < anthropic);
    assert!(screen.contains("✓ Claude 3 Opus"));
    assert!(screen.contains("▶ ✓ Claude 3 Opus"));
    Ok(())
}

#[test]
fn test_render_model_selector_no_match() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Input);
    app.open_model_selector();
    if let Some(input) = app.input_mut() {
        input.selector.handle_filter_char('z');
    }
    let screen = draw(&app, 100, 30)?;
    assert!(screen.contains("No matching models"));
    Ok(())
}

#[test]
fn test_render_status_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.set_status("Analysis complete");
    let screen = draw(&app, 80, 24)?;
    assert!(screen.contains("Analysis complete"));
    Ok(())
}

#[test]
fn test_render_tiny_terminal() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.navigate(Route::Input);
    app.open_model_selector();
    draw(&app, 10, 4)?;
    app.enter_help();
    draw(&app, 10, 4)?;
    Ok(())
}
