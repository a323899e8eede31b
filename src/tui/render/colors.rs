//! Color palette for the TUI
//!
//! Muted chrome with one accent, plus the three counter bands

use crate::editor::CountBand;
use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const BORDER_FOCUSED: Color = Color::Rgb(100, 180, 220);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);
pub const SKELETON: Color = Color::Rgb(55, 60, 75);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Accent
pub const ACCENT: Color = Color::Rgb(100, 180, 220);
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 80);
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);

// Modals
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);

/// Counter color for a band
#[must_use]
pub const fn band(band: CountBand) -> Color {
    match band {
        CountBand::Ok => ACCENT_POSITIVE,
        CountBand::Warn => ACCENT_WARNING,
        CountBand::Critical => ACCENT_NEGATIVE,
    }
}
