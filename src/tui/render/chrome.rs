//! Navbar, status bar and footer

use super::colors;
use crate::app::{App, Screen};
use crate::config::Action;
use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the top bar: product name and navigation hints
pub fn render_navbar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" ✎ ", Style::default().fg(colors::ACCENT)),
        Span::styled(
            "Clarifi",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(brand, area);

    let hints: &[(Action, &str)] = if matches!(app.screen, Screen::Home) {
        &[(Action::Start, "Write"), (Action::Help, "Help")]
    } else {
        &[(Action::Help, "Help")]
    };
    let nav = Paragraph::new(Line::from(Span::styled(
        format!("{} ", app.config.keys.status_hints(hints)),
        Style::default().fg(colors::TEXT_DIM),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(nav, area);
}

/// Render the status line: the last status message, or key hints for the view
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = app.status_message.as_ref().map_or_else(
        || {
            let hints: &[(Action, &str)] = match app.screen {
                Screen::Home => &[
                    (Action::Start, "get started"),
                    (Action::Help, "help"),
                    (Action::Quit, "quit"),
                ],
                Screen::Input(_) => &[
                    (Action::Submit, "analyze"),
                    (Action::OpenModels, "model"),
                    (Action::ClearText, "clear"),
                    (Action::Back, "back"),
                    (Action::Quit, "quit"),
                ],
                Screen::Feedback(_) | Screen::Rewrite(_) => &[
                    (Action::ScrollDown, "scroll"),
                    (Action::Back, "back"),
                    (Action::Quit, "quit"),
                ],
            };
            Line::from(Span::styled(
                format!(" {}", app.config.keys.status_hints(hints)),
                Style::default().fg(colors::TEXT_MUTED),
            ))
        },
        |message| {
            Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(colors::ACCENT),
            ))
        },
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the footer: copyright on the left, tagline on the right
pub fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let year = chrono::Local::now().year();
    let style = Style::default().fg(colors::TEXT_MUTED);

    frame.render_widget(
        Paragraph::new(format!(" © {year} Clarifi. All rights reserved.")).style(style),
        area,
    );
    frame.render_widget(
        Paragraph::new("Improve your writing with AI ")
            .style(style)
            .alignment(Alignment::Right),
        area,
    );
}
