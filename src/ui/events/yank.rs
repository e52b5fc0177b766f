//! Yank (copy) handlers
//!
//! This module handles copying content to the system clipboard: the request
//! example of an endpoint, or its whole plain-text detail.

use crate::actions::{apply_action, AppAction};
use crate::render::render_endpoint;
use crate::state::AppState;
use arboard::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YankTarget {
    /// The literal request example
    Request,
    /// Request, usage and every response, as shown in the details panel
    Detail,
}

/// Copy content of the expanded (or highlighted) endpoint to the clipboard
pub fn handle_yank(target: YankTarget, state: &mut AppState) {
    let Some((id, text)) = yank_text(target, state) else {
        tracing::debug!("nothing to yank");
        return;
    };

    let message = match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            tracing::debug!(endpoint = id, ?target, "yanked to clipboard");
            match target {
                YankTarget::Request => format!("Requête {id} copiée"),
                YankTarget::Detail => format!("Détails {id} copiés"),
            }
        }
        Err(e) => {
            tracing::warn!("failed to copy to clipboard: {e}");
            "Presse-papiers indisponible".to_string()
        }
    };

    apply_action(AppAction::SetStatusMessage(message), state);
}

/// Text to copy and the id of the endpoint it comes from.
///
/// The expanded endpoint wins over the highlighted one.
pub fn yank_text(target: YankTarget, state: &AppState) -> Option<(&'static str, String)> {
    let endpoint = state
        .expanded_endpoint()
        .or_else(|| state.highlighted_endpoint())?;

    let text = match target {
        YankTarget::Request => endpoint.request_example.to_string(),
        YankTarget::Detail => render_endpoint(endpoint).to_plain_text(),
    };

    Some((endpoint.id, text))
}
