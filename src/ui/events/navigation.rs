//! Navigation handlers
//!
//! Up/down movement depends on the focused panel: in the categories panel it
//! switches the active category, in the endpoints panel it moves the cursor,
//! in the details panel it scrolls one line.

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::PanelFocus;

pub fn handle_down(state: &mut AppState) {
    let action = match state.panel_focus {
        PanelFocus::Categories => AppAction::NextCategory,
        PanelFocus::Endpoints => AppAction::NavigateDown,
        PanelFocus::Details => AppAction::ScrollDown(1),
    };
    apply_action(action, state);
}

pub fn handle_up(state: &mut AppState) {
    let action = match state.panel_focus {
        PanelFocus::Categories => AppAction::PreviousCategory,
        PanelFocus::Endpoints => AppAction::NavigateUp,
        PanelFocus::Details => AppAction::ScrollUp(1),
    };
    apply_action(action, state);
}

/// Digit shortcuts: 1..9 select the first nine categories, 0 the tenth
pub fn handle_category_shortcut(digit: char, state: &mut AppState) {
    if let Some(n) = digit.to_digit(10) {
        let index = if n == 0 { 9 } else { n as usize - 1 };
        apply_action(AppAction::SelectCategoryAt(index), state);
    }
}
