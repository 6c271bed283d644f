//! Small fixed palette. Kept as functions so a theme layer can slot in
//! later without touching call sites.

use ratatui::style::Color;

pub(crate) fn primary() -> Color {
    Color::Cyan
}

pub(crate) fn success() -> Color {
    Color::Green
}

pub(crate) fn selection() -> Color {
    Color::DarkGray
}

pub(crate) fn text_bright() -> Color {
    Color::White
}

pub(crate) fn text_dim() -> Color {
    Color::Gray
}
