//! Search handlers
//!
//! This module handles searching/filtering endpoints:
//! - Handling search input
//! - Paste batching while typing
//! - Clearing search filters

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Handle a key while the search bar has input focus
pub fn handle_search_input(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => {
            // Exit search mode and keep the filter active
            apply_action(AppAction::ExitSearchMode, state);
            tracing::debug!("exiting search mode (keeping filter)");
        }
        KeyCode::Esc => {
            // Exit search mode and clear the filter
            apply_action(AppAction::ClearSearchTerm, state);
            apply_action(AppAction::ExitSearchMode, state);
            tracing::debug!("exiting search mode (cleared filter)");
        }
        KeyCode::Backspace => {
            apply_action(AppAction::BackspaceSearchTerm, state);
        }
        KeyCode::Char('w') if ctrl => {
            apply_action(AppAction::DeleteWordSearchTerm, state);
        }
        KeyCode::Char('l') if ctrl => {
            // Ctrl+L: Clear search (consistent with normal mode)
            apply_action(AppAction::ClearSearchTerm, state);
        }
        KeyCode::Char(c) if !ctrl => {
            apply_action(AppAction::AppendToSearchTerm(c.to_string()), state);
        }
        _ => {}
    }
}

/// Clear search filter from normal mode
pub fn handle_search_clear(state: &mut AppState) {
    if !state.selection.search_term().is_empty() {
        apply_action(AppAction::ClearSearchTerm, state);
        tracing::debug!("cleared search filter");
    }
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this function checks for any immediately available
/// character events and batches them together. This enables fast paste operations
/// in terminals. A key press that ends the batch is returned so the caller can
/// still dispatch it.
pub fn collect_paste_batch(initial_char: char) -> (String, Option<KeyEvent>) {
    drain_paste_batch(initial_char, || match event::poll(Duration::ZERO) {
        Ok(true) => event::read().ok(),
        _ => None,
    })
}

/// Batch plain characters pulled from `next_event` until it runs dry or a
/// non-character key press arrives. Release and repeat events are skipped.
fn drain_paste_batch(
    initial_char: char,
    mut next_event: impl FnMut() -> Option<Event>,
) -> (String, Option<KeyEvent>) {
    let mut batch = String::from(initial_char);

    while let Some(next) = next_event() {
        let Event::Key(key) = next else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => batch.push(c),
            _ => return (batch, Some(key)),
        }
    }

    (batch, None)
}
