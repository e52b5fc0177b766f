//! Event handling for the documentation browser
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles two input modes:
//! - Normal: navigation, expansion, clipboard and focus commands
//! - Searching: typing into the search bar
//!
//! # Architecture
//!
//! Input events generate AppActions that are applied to AppState via the
//! apply_action function in actions.rs. `handle_key` holds the whole key map
//! and does no terminal I/O, so it can be driven directly from tests.

mod navigation;
mod search;
mod yank;

pub use yank::YankTarget;

use crate::actions::{apply_action, AppAction, SCROLL_LINES_PER_ACTION};
use crate::state::AppState;
use crate::types::InputMode;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait briefly for one terminal event and apply it
    pub fn handle_events(&mut self, state: &mut AppState) -> Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match (state.input_mode, key.code) {
                (InputMode::Searching, KeyCode::Char(c))
                    if !key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    let (batch, rest) = search::collect_paste_batch(c);
                    apply_action(AppAction::AppendToSearchTerm(batch), state);
                    if let Some(rest) = rest {
                        self.handle_key(rest, state);
                    }
                }
                _ => self.handle_key(key, state),
            }
        }

        Ok(())
    }

    /// Dispatch a single key press based on the current input mode
    pub fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C quits from anywhere
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if state.input_mode == InputMode::Searching {
            search::handle_search_input(key, state);
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            // Focus
            KeyCode::Tab => apply_action(AppAction::FocusNextPanel, state),
            KeyCode::BackTab => apply_action(AppAction::FocusPreviousPanel, state),

            // Details scrolling
            KeyCode::Char('u') if ctrl => {
                apply_action(AppAction::ScrollUp(SCROLL_LINES_PER_ACTION), state);
            }
            KeyCode::Char('d') if ctrl => {
                apply_action(AppAction::ScrollDown(SCROLL_LINES_PER_ACTION), state);
            }
            KeyCode::PageUp => apply_action(AppAction::ScrollUp(SCROLL_LINES_PER_ACTION), state),
            KeyCode::PageDown => {
                apply_action(AppAction::ScrollDown(SCROLL_LINES_PER_ACTION), state);
            }

            // Search
            KeyCode::Char('l') if ctrl => search::handle_search_clear(state),
            KeyCode::Char('/') => {
                apply_action(AppAction::EnterSearchMode, state);
                tracing::debug!("entering search mode");
            }

            // Movement
            KeyCode::Char('j') | KeyCode::Down => navigation::handle_down(state),
            KeyCode::Char('k') | KeyCode::Up => navigation::handle_up(state),
            KeyCode::Char('l') | KeyCode::Char(']') | KeyCode::Right => {
                apply_action(AppAction::NextCategory, state);
            }
            KeyCode::Char('h') | KeyCode::Char('[') | KeyCode::Left => {
                apply_action(AppAction::PreviousCategory, state);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                navigation::handle_category_shortcut(c, state);
            }

            // Expansion
            KeyCode::Enter | KeyCode::Char(' ') => {
                apply_action(AppAction::ToggleHighlighted, state);
            }

            // Clipboard
            KeyCode::Char('y') => yank::handle_yank(YankTarget::Request, state),
            KeyCode::Char('Y') => yank::handle_yank(YankTarget::Detail, state),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::state::Selection;
    use crate::types::{CategoryKey, PanelFocus};

    fn create_test_state() -> AppState {
        let catalog = Catalog::builtin();
        let selection = Selection::new(catalog.first_category());
        AppState::new(catalog, selection)
    }

    fn press(handler: &mut EventHandler, state: &mut AppState, code: KeyCode) {
        handler.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state);
    }

    fn press_ctrl(handler: &mut EventHandler, state: &mut AppState, c: char) {
        handler.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), state);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = create_test_state();

        let mut handler = EventHandler::new();
        press(&mut handler, &mut state, KeyCode::Char('q'));
        assert!(handler.should_quit);

        let mut handler = EventHandler::new();
        press_ctrl(&mut handler, &mut state, 'c');
        assert!(handler.should_quit);
    }

    #[test]
    fn test_q_types_while_searching() {
        let mut state = create_test_state();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut state, KeyCode::Char('/'));
        assert_eq!(state.input_mode, InputMode::Searching);

        press(&mut handler, &mut state, KeyCode::Char('q'));
        assert!(!handler.should_quit);
        assert_eq!(state.selection.search_term(), "q");
    }

    #[test]
    fn test_search_flow_filters_list() {
        let mut state = create_test_state();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut state, KeyCode::Char('/'));
        for c in "refresh".chars() {
            press(&mut handler, &mut state, KeyCode::Char(c));
        }
        press(&mut handler, &mut state, KeyCode::Enter);

        assert_eq!(state.input_mode, InputMode::Normal);
        let visible: Vec<&str> = state.visible_endpoints().iter().map(|e| e.id).collect();
        assert_eq!(visible, vec!["auth-refresh"]);

        press_ctrl(&mut handler, &mut state, 'l');
        assert_eq!(state.visible_endpoints().len(), 2);
    }

    #[test]
    fn test_category_keys() {
        let mut state = create_test_state();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut state, KeyCode::Char('l'));
        assert_eq!(state.selection.category(), CategoryKey::Password);

        press(&mut handler, &mut state, KeyCode::Char('['));
        assert_eq!(state.selection.category(), CategoryKey::Authentication);

        press(&mut handler, &mut state, KeyCode::Left);
        assert_eq!(state.selection.category(), CategoryKey::Mobile);

        press(&mut handler, &mut state, KeyCode::Char('5'));
        assert_eq!(state.selection.category(), CategoryKey::Charges);
    }

    #[test]
    fn test_enter_toggles_highlighted_endpoint() {
        let mut state = create_test_state();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut state, KeyCode::Char('j'));
        press(&mut handler, &mut state, KeyCode::Enter);
        assert_eq!(state.selection.expanded(), Some("auth-refresh"));

        press(&mut handler, &mut state, KeyCode::Char(' '));
        assert_eq!(state.selection.expanded(), None);
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = create_test_state();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut state, KeyCode::Tab);
        assert_eq!(state.panel_focus, PanelFocus::Details);

        press(&mut handler, &mut state, KeyCode::BackTab);
        press(&mut handler, &mut state, KeyCode::BackTab);
        assert_eq!(state.panel_focus, PanelFocus::Categories);
    }

    #[test]
    fn test_details_scroll_keys() {
        let mut state = create_test_state();
        let mut handler = EventHandler::new();

        press(&mut handler, &mut state, KeyCode::Enter);
        press_ctrl(&mut handler, &mut state, 'd');
        assert_eq!(state.details_scroll, SCROLL_LINES_PER_ACTION);

        press(&mut handler, &mut state, KeyCode::PageUp);
        assert_eq!(state.details_scroll, 0);
    }
}
