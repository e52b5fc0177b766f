//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::types::HttpMethod;
use ratatui::style::Color;

/// Get the color for an HTTP method
pub fn get_method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
    }
}

/// Border color of the panel that has focus
pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn default_fg() -> Color {
    Color::White
}

/// Background of request/response code blocks
pub fn code_bg() -> Color {
    Color::Rgb(31, 41, 55)
}

/// Method column width for consistent formatting
pub const METHOD_COLUMN_WIDTH: usize = 7;
