//! View renderers: home, input and the two results views

use super::colors;
use crate::app::{App, InputScreen, Mode};
use crate::catalog::ModelDescriptor;
use crate::config::Action;
use crate::route::SessionId;
use crate::submission::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which results view to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Results {
    /// Feedback on the analyzed text
    Feedback,
    /// Rewritten text
    Rewrite,
}

impl Results {
    const fn title(self) -> &'static str {
        match self {
            Self::Feedback => "Feedback",
            Self::Rewrite => "Rewrite",
        }
    }

    const fn placeholder(self) -> &'static str {
        match self {
            Self::Feedback => "Feedback page content will go here",
            Self::Rewrite => "Rewrite page content will go here",
        }
    }
}

/// Render the landing view
pub fn render_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Clarifi",
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Refine your writing with AI-powered feedback and suggestions",
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Get Started  ",
            Style::default()
                .fg(colors::MODAL_BG)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Press {} to begin",
                app.config.keys.format_keys(Action::Start)
            ),
            Style::default().fg(colors::TEXT_DIM),
        )),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

/// Render the editor, model card and submit button
pub fn render_input(frame: &mut Frame<'_>, app: &App, input: &InputScreen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_editor(frame, app, input, chunks[0]);
    render_editor_footer(frame, input, chunks[1]);
    render_model_card(frame, app, input, chunks[2]);
    render_submit(frame, app, input, chunks[3], chunks[4]);
}

fn render_editor(frame: &mut Frame<'_>, app: &App, input: &InputScreen, area: Rect) {
    let focused = app.mode == Mode::Normal;
    let block = Block::default()
        .title(" Enter Your Text ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            colors::BORDER_FOCUSED
        } else {
            colors::BORDER
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let editor = &input.editor;
    if editor.text().is_empty() {
        frame.render_widget(
            Paragraph::new("Type or paste your text here for analysis...")
                .style(Style::default().fg(colors::TEXT_MUTED)),
            inner,
        );
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // Keep the cursor inside the box; the text is not wrapped
    let (line, _) = editor.cursor_position();
    let line = u16::try_from(line).unwrap_or(u16::MAX);
    let column = u16::try_from(editor.cursor_display_column()).unwrap_or(u16::MAX);
    let row_offset = line.saturating_sub(inner.height.saturating_sub(1));
    let col_offset = column.saturating_sub(inner.width.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(editor.text())
            .style(Style::default().fg(colors::TEXT_PRIMARY))
            .scroll((row_offset, col_offset)),
        inner,
    );
    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + (column - col_offset),
            inner.y + (line - row_offset),
        ));
    }
}

fn render_editor_footer(frame: &mut Frame<'_>, input: &InputScreen, area: Rect) {
    let editor = &input.editor;
    frame.render_widget(
        Paragraph::new(" Plain text formatting").style(Style::default().fg(colors::TEXT_DIM)),
        area,
    );
    let counter = Span::styled(
        format!("{} / {} characters ", editor.char_count(), editor.max_length()),
        Style::default().fg(colors::band(editor.band())),
    );
    frame.render_widget(
        Paragraph::new(Line::from(counter)).alignment(Alignment::Right),
        area,
    );
}

fn render_model_card(frame: &mut Frame<'_>, app: &App, input: &InputScreen, area: Rect) {
    let block = Block::default()
        .title(" Select Model ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));

    let lines = input.selector.selected(&app.catalog).map_or_else(
        || {
            vec![
                Line::from(Span::styled(
                    "No model selected",
                    Style::default().fg(colors::TEXT_DIM),
                )),
                Line::from(Span::styled(
                    format!(
                        "Press {} to choose a model",
                        app.config.keys.format_keys(Action::OpenModels)
                    ),
                    Style::default().fg(colors::TEXT_MUTED),
                )),
            ]
        },
        model_card_lines,
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn model_card_lines(model: &ModelDescriptor) -> Vec<Line<'static>> {
    let label = Style::default().fg(colors::TEXT_DIM);
    let value = Style::default().fg(colors::TEXT_PRIMARY);
    vec![
        Line::from(vec![
            Span::styled(
                model.name.clone(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", model.provider), label),
        ]),
        Line::from(vec![
            Span::styled("Cost: ", label),
            Span::styled(format!("{} / 1k tokens", model.cost_label()), value),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(
                model.performance.speed.stars(),
                Style::default().fg(colors::ACCENT_WARNING),
            ),
            Span::styled("   Quality: ", label),
            Span::styled(
                model.performance.quality.stars(),
                Style::default().fg(colors::ACCENT_WARNING),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best for: ", label),
            Span::styled(model.strengths.join(", "), value),
        ]),
    ]
}

fn render_submit(
    frame: &mut Frame<'_>,
    app: &App,
    input: &InputScreen,
    button_area: Rect,
    error_area: Rect,
) {
    let submission = &input.submission;
    let (label, style) = if submission.is_busy() {
        let spinner = SPINNER[app.tick % SPINNER.len()];
        (
            format!("  Analyzing... {spinner}  "),
            Style::default().fg(colors::TEXT_DIM).bg(colors::SURFACE_HIGHLIGHT),
        )
    } else if submission.can_submit(input.editor.text()) {
        (
            "  Analyze Text  ".to_string(),
            Style::default()
                .fg(colors::MODAL_BG)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "  Analyze Text  ".to_string(),
            Style::default()
                .fg(colors::TEXT_MUTED)
                .bg(colors::SURFACE_HIGHLIGHT),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), button_area);

    if let Phase::Error(err) = submission.phase() {
        frame.render_widget(
            Paragraph::new(err.to_string()).style(Style::default().fg(colors::ACCENT_NEGATIVE)),
            error_area,
        );
    }
}

/// Render a feedback or rewrite view
pub fn render_results(
    frame: &mut Frame<'_>,
    app: &App,
    kind: Results,
    session: &SessionId,
    area: Rect,
) {
    let width = usize::from(area.width.saturating_sub(4));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    frame.render_widget(
        Paragraph::new(results_lines(kind, session.as_str(), width))
            .block(block)
            .scroll((app.results_scroll, 0)),
        area,
    );
}

/// Number of lines a results view draws, whatever the width
#[must_use]
pub fn results_height(kind: Results) -> u16 {
    u16::try_from(results_lines(kind, "", 0).len()).unwrap_or(u16::MAX)
}

fn results_lines(kind: Results, session: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            kind.title(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Session ID: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(session.to_string(), Style::default().fg(colors::ACCENT)),
        ]),
        Line::from(Span::styled(
            kind.placeholder(),
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        Line::from(""),
    ];
    lines.extend(match kind {
        Results::Feedback => feedback_skeleton(width),
        Results::Rewrite => rewrite_skeleton(width),
    });
    lines
}

fn bar(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "█".repeat(width),
        Style::default().fg(colors::SKELETON),
    ))
}

fn feedback_skeleton(width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![bar(width.min(32)), bar(width), Line::from("")];
    for _ in 0..5 {
        lines.extend([
            bar(width.min(16)),
            bar(width),
            bar(width * 3 / 4),
            Line::from(""),
        ]);
    }
    lines
}

fn rewrite_skeleton(width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = (0..8).map(|_| bar(width)).collect();
    lines.push(Line::from(""));
    let half = width.min(16);
    lines.push(Line::from(vec![
        Span::styled("█".repeat(half), Style::default().fg(colors::SKELETON)),
        Span::raw(" ".repeat(width.saturating_sub(half * 2))),
        Span::styled("█".repeat(half), Style::default().fg(colors::SKELETON)),
    ]));
    lines.push(bar(width));
    lines
}
