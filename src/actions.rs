use crate::render::render_endpoint;
use crate::state::AppState;
use crate::types::{CategoryKey, InputMode};

/// Lines scrolled per Ctrl+U / Ctrl+D in the details panel
pub const SCROLL_LINES_PER_ACTION: usize = 5;

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Category actions
    SelectCategory(CategoryKey),
    SelectCategoryAt(usize),
    NextCategory,
    PreviousCategory,

    // Endpoint list actions
    NavigateUp,
    NavigateDown,
    ToggleExpanded(&'static str),
    ToggleHighlighted,

    // Focus actions
    FocusNextPanel,
    FocusPreviousPanel,

    // Scrolling actions
    ScrollUp(usize),
    ScrollDown(usize),

    // Search actions
    EnterSearchMode,
    ExitSearchMode,
    AppendToSearchTerm(String),
    BackspaceSearchTerm,
    DeleteWordSearchTerm,
    ClearSearchTerm,

    SetStatusMessage(String),
}

/// Apply an action to the application state
/// This is a pure state transformation function that mutates AppState based on the action
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Categories
        AppAction::SelectCategory(category) => {
            select_category(state, category);
        }
        AppAction::SelectCategoryAt(index) => {
            if let Some(category) = state.catalog.categories().get(index) {
                let key = category.key;
                select_category(state, key);
            }
        }
        AppAction::NextCategory => {
            let count = state.catalog.categories().len();
            if count > 0 {
                let current = state
                    .catalog
                    .category_index(state.selection.category())
                    .unwrap_or(0);
                let key = state.catalog.categories()[(current + 1) % count].key;
                select_category(state, key);
            }
        }
        AppAction::PreviousCategory => {
            let count = state.catalog.categories().len();
            if count > 0 {
                let current = state
                    .catalog
                    .category_index(state.selection.category())
                    .unwrap_or(0);
                let key = state.catalog.categories()[(current + count - 1) % count].key;
                select_category(state, key);
            }
        }

        // Endpoint list
        AppAction::NavigateUp => {
            state.endpoint_cursor = state.endpoint_cursor.saturating_sub(1);
        }
        AppAction::NavigateDown => {
            let count = state.visible_endpoints().len();
            if state.endpoint_cursor + 1 < count {
                state.endpoint_cursor += 1;
            }
        }
        AppAction::ToggleExpanded(id) => {
            state.selection.toggle_expanded(id);
            state.details_scroll = 0;
            tracing::debug!(expanded = ?state.selection.expanded(), "toggled endpoint");
        }
        AppAction::ToggleHighlighted => {
            if let Some(id) = state.highlighted_endpoint().map(|e| e.id) {
                apply_action(AppAction::ToggleExpanded(id), state);
            }
        }

        // Focus
        AppAction::FocusNextPanel => {
            state.panel_focus = state.panel_focus.next();
        }
        AppAction::FocusPreviousPanel => {
            state.panel_focus = state.panel_focus.previous();
        }

        // Scrolling
        AppAction::ScrollUp(lines) => {
            state.details_scroll = state.details_scroll.saturating_sub(lines);
        }
        AppAction::ScrollDown(lines) => {
            let max_scroll = details_line_count(state).saturating_sub(1);
            state.details_scroll = state.details_scroll.saturating_add(lines).min(max_scroll);
        }

        // Search
        AppAction::EnterSearchMode => {
            state.input_mode = InputMode::Searching;
        }
        AppAction::ExitSearchMode => {
            state.input_mode = InputMode::Normal;
        }
        AppAction::AppendToSearchTerm(text) => {
            let term = format!("{}{}", state.selection.search_term(), text);
            set_search_term(state, term);
        }
        AppAction::BackspaceSearchTerm => {
            let mut term = state.selection.search_term().to_string();
            term.pop();
            set_search_term(state, term);
        }
        AppAction::DeleteWordSearchTerm => {
            let mut term = state.selection.search_term().to_string();
            delete_word(&mut term);
            set_search_term(state, term);
        }
        AppAction::ClearSearchTerm => {
            set_search_term(state, String::new());
        }

        AppAction::SetStatusMessage(message) => {
            state.set_status_message(message);
        }
    }
}

fn select_category(state: &mut AppState, category: CategoryKey) {
    if state.selection.category() == category {
        return;
    }
    state.selection.select_category(category);
    state.endpoint_cursor = 0;
    state.details_scroll = 0;
    tracing::debug!(category = %category, "selected category");
}

/// Every search edit resets the cursor to the top of the list
fn set_search_term(state: &mut AppState, term: String) {
    state.selection.set_search_term(term);
    state.endpoint_cursor = 0;
    tracing::debug!(term = state.selection.search_term(), "search term changed");
}

/// Number of lines the details panel shows for the expanded endpoint
fn details_line_count(state: &AppState) -> usize {
    state
        .expanded_endpoint()
        .map(|endpoint| render_endpoint(endpoint).to_plain_text().lines().count())
        .unwrap_or(0)
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    // Find last whitespace and truncate there
    if let Some(pos) = s.rfind(char::is_whitespace) {
        s.truncate(pos);
    } else {
        // No whitespace found, clear entire string
        s.clear();
    }
}
