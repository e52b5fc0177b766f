//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, search bar, empty states)
//! - `panels`: Main panels (categories, endpoints list, details panel)
//! - `styling`: Color schemes and style constants

mod components;
mod panels;
mod styling;

pub use components::{render_footer, render_header, render_search_bar};
pub use panels::{
    build_detail_lines, render_categories_panel, render_details_panel, render_endpoints_panel,
};

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Frame,
};

/// Draw the whole screen from the current state.
///
/// Layout: header, search bar, body (categories | endpoints | details), footer.
pub fn render(frame: &mut Frame, state: &AppState, list_state: &mut ListState, year: i32) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32),
            Constraint::Percentage(40),
            Constraint::Min(0),
        ])
        .split(main_chunks[2]);

    render_header(frame, main_chunks[0], state.catalog.endpoints().len());
    render_search_bar(frame, main_chunks[1], state);
    render_categories_panel(frame, body_chunks[0], state);
    render_endpoints_panel(frame, body_chunks[1], state, list_state);
    render_details_panel(frame, body_chunks[2], state);
    render_footer(frame, main_chunks[3], state, year);
}
