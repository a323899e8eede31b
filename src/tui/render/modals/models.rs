//! Model selector modal rendering

use crate::app::App;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect_absolute, modal_height};
use crate::tui::render::colors;

/// Render the model selector overlay, grouped by provider
pub fn render_model_selector_overlay(frame: &mut Frame<'_>, app: &App) {
    let Some(input) = app.input() else {
        return;
    };
    let selector = &input.selector;
    let filtered = selector.filtered(&app.catalog);
    let current = selector.selected_id();

    let mut lines: Vec<Line<'_>> = vec![
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                format!("{}_", selector.filter),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ]),
        Line::from(""),
    ];

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matching models",
            Style::default().fg(colors::TEXT_MUTED),
        )));
    }

    let mut provider = None;
    for (idx, model) in filtered.iter().enumerate() {
        if provider != Some(model.provider.as_str()) {
            if provider.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                model.provider.clone(),
                Style::default()
                    .fg(colors::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )));
            provider = Some(model.provider.as_str());
        }

        let is_cursor = idx == selector.highlighted;
        let row_style = if is_cursor {
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .bg(colors::SURFACE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_PRIMARY)
        };
        let cursor = if is_cursor { "▶ " } else { "  " };
        let check = if current == Some(model.id.as_str()) {
            "✓ "
        } else {
            "  "
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{cursor}{check}{:<18}", model.name), row_style),
            Span::styled(
                format!(" {:>7}", model.cost_label()),
                Style::default().fg(colors::TEXT_DIM),
            ),
            Span::styled(
                format!("  {} {}", model.performance.speed.stars(), model.performance.quality.stars()),
                Style::default().fg(colors::ACCENT_WARNING),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select • Enter confirm • Esc cancel • Type to filter",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let height = modal_height(lines.len(), frame.area());
    let area = centered_rect_absolute(70, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Select Model ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER_FOCUSED)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
