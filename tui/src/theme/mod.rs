//! Theme and Colors
//!
//! Palette for the portfolio header: a bold accent for the owner's name, a
//! softer tone for the lead-in text, and a bright typewriter line.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Header Palette
// ============================================================================

/// Owner's name - signature magenta
pub const NAME_MAGENTA: Color = Color::Magenta;

/// Lead-in text before the typewriter phrase
pub const LEAD_GRAY: Color = Color::Rgb(180, 180, 190);

/// The typed phrase itself
pub const TYPED_CORAL: Color = Color::Rgb(255, 150, 120);

/// Typewriter cursor
pub const CURSOR_CORAL: Color = Color::Rgb(255, 127, 127);

/// System/dim text (footer hints)
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Style for the name line
#[must_use]
pub fn name_style() -> Style {
    Style::default()
        .fg(NAME_MAGENTA)
        .add_modifier(Modifier::BOLD)
}

/// Style for the lead-in text
#[must_use]
pub fn lead_style() -> Style {
    Style::default().fg(LEAD_GRAY)
}

/// Style for the typed phrase
#[must_use]
pub fn typed_style() -> Style {
    Style::default().fg(TYPED_CORAL).add_modifier(Modifier::BOLD)
}

/// Style for the cursor block
#[must_use]
pub fn cursor_style() -> Style {
    Style::default().fg(CURSOR_CORAL)
}

/// Style for hints
#[must_use]
pub fn hint_style() -> Style {
    Style::default().fg(DIM_GRAY)
}
