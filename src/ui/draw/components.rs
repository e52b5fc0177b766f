//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (title, endpoint count)
//! - Footer (command help, status message, copyright)
//! - Search bar
//! - Category description and empty state messages

use super::styling;
use crate::state::AppState;
use crate::types::{Category, InputMode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SEARCH_PLACEHOLDER: &str = "Rechercher un endpoint...";

/// Render the application header
pub fn render_header(frame: &mut Frame, area: Rect, endpoints_count: usize) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Documentation API",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::raw("Liste des endpoints(services) nkezefuu"),
        Span::styled(
            format!(" [{endpoints_count} endpoints]"),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the search bar with active filter indication
pub fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_active = matches!(state.input_mode, InputMode::Searching);
    let term = state.selection.search_term();

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if !term.is_empty() {
        Style::default().fg(Color::Green) // Show filter is active
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Show match count if filtering
    let title = if !term.is_empty() {
        let count = state.visible_endpoints().len();
        let total = state.category_endpoint_count();
        format!(" Recherche [{count}/{total}] ")
    } else {
        " Recherche (/) ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let search_text = if is_active {
        Line::from(format!("{term}_")) // Show cursor
    } else if term.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(term.to_string())
    };

    let paragraph = Paragraph::new(search_text).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the active category name and description
pub fn render_category_banner(frame: &mut Frame, area: Rect, category: Option<&Category>) {
    let lines = match category {
        Some(category) => vec![
            Line::from(Span::styled(
                category.name,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                category.description,
                Style::default().fg(Color::LightBlue),
            )),
        ],
        None => vec![],
    };

    let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(banner, area);
}

/// Render the footer with command help and the transient status message
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, year: i32) {
    let help = match state.input_mode {
        InputMode::Searching => "Entrée:Valider Esc:Annuler Ctrl+W:Mot Ctrl+L:Effacer",
        InputMode::Normal => {
            "Tab:Panneau j/k:Nav h/l:Catégorie Entrée:Déplier /:Rechercher y/Y:Copier q:Quitter"
        }
    };

    let mut spans = vec![Span::styled(help, Style::default().fg(Color::Yellow))];

    if let Some((message, _)) = &state.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styling::unfocused_border()))
            .title_bottom(
                Line::from(format!(" © {year} NKEZEFUU. Tous droits réservés "))
                    .right_aligned(),
            ),
    );

    frame.render_widget(footer, area);
}

/// Render no search results message
pub fn render_no_results(frame: &mut Frame, area: Rect, border_color: Color) {
    let empty = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Aucun résultat trouvé",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Essayez avec Autrement",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title("[2] Endpoints (0)"),
    );

    frame.render_widget(empty, area);
}
