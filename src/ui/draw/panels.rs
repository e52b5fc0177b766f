//! Main panel rendering
//!
//! This module contains rendering functions for the three main panels:
//! - Categories panel (left side)
//! - Endpoints panel (middle) - category banner and filtered endpoint list
//! - Details panel (right side) - request, usage and responses of the expanded endpoint

use super::components::{render_category_banner, render_no_results};
use super::styling::{self, get_method_color, METHOD_COLUMN_WIDTH};
use crate::render::{render_endpoint, RenderedEndpoint};
use crate::state::AppState;
use crate::types::PanelFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn border_color(state: &AppState, panel: PanelFocus) -> Color {
    if state.panel_focus == panel {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    }
}

/// Render the left panel with all categories, active one highlighted
pub fn render_categories_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let active = state.selection.category();

    let items: Vec<ListItem> = state
        .catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(index, category)| {
            // 1..9 then 0 for the tenth
            let shortcut = (index + 1) % 10;
            let style = if category.key == active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Indexed(61))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(styling::default_fg())
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{shortcut} "), Style::default().fg(Color::DarkGray)),
                Span::styled(category.name, style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(state.catalog.category_index(active));

    let list = List::new(items).block(
        Block::default()
            .title("[1] Catégories")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(state, PanelFocus::Categories))),
    );

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the middle panel: category banner on top, endpoint list below
pub fn render_endpoints_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    list_state: &mut ListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category banner
            Constraint::Min(0),    // Endpoint list
        ])
        .split(area);

    render_category_banner(
        frame,
        chunks[0],
        state.catalog.category(state.selection.category()),
    );

    let visible = state.visible_endpoints();
    let color = border_color(state, PanelFocus::Endpoints);

    if visible.is_empty() {
        render_no_results(frame, chunks[1], color);
        return;
    }

    let expanded = state.selection.expanded();

    let items: Vec<ListItem> = visible
        .iter()
        .map(|endpoint| {
            let marker = if expanded == Some(endpoint.id) { "▼" } else { "▶" };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:width$}", endpoint.method, width = METHOD_COLUMN_WIDTH),
                        Style::default()
                            .fg(get_method_color(endpoint.method))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(endpoint.path),
                ]),
                Line::from(Span::styled(
                    format!("  {}", endpoint.description),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    list_state.select(Some(state.endpoint_cursor.min(visible.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("[2] Endpoints ({})", visible.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, chunks[1], list_state);
}

/// Render the right panel with the expanded endpoint's examples
pub fn render_details_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("[3] Détails")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(state, PanelFocus::Details)));

    let Some(endpoint) = state.expanded_endpoint() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Appuyez sur [Entrée] pour afficher les exemples d'un endpoint",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let rendered = render_endpoint(endpoint);
    let details = Paragraph::new(build_detail_lines(&rendered))
        .block(block)
        .scroll((u16::try_from(state.details_scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(details, area);
}

/// Lines shown in the details panel for one endpoint
pub fn build_detail_lines(rendered: &RenderedEndpoint<'_>) -> Vec<Line<'static>> {
    let endpoint = rendered.endpoint;
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let code = Style::default().fg(Color::Gray).bg(styling::code_bg());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                endpoint.method.to_string(),
                Style::default()
                    .fg(get_method_color(endpoint.method))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(endpoint.path),
        ]),
        Line::from(Span::styled(
            endpoint.description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled("Requête", heading)),
    ];

    lines.extend(
        rendered
            .request
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), code))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        rendered.usage.to_string(),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Réponses", heading)));

    for (index, response) in rendered.responses.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            response.summary.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            response
                .body
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), code))),
        );
    }

    lines
}
