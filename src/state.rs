use crate::catalog::Catalog;
use crate::filter::filter_endpoints;
use crate::types::{CategoryKey, Endpoint, InputMode, PanelFocus};
use std::time::{Duration, Instant};

/// How long a footer status message stays visible
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Browsing state: active category, search term and the expanded endpoint.
///
/// At most one endpoint is expanded at a time. Changing category or search
/// term never touches the other fields, except that a category switch may
/// collapse the expanded endpoint when `collapse_on_category_change` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    category: CategoryKey,
    search_term: String,
    expanded: Option<&'static str>,
    collapse_on_category_change: bool,
}

impl Selection {
    pub fn new(category: CategoryKey) -> Self {
        Self {
            category,
            search_term: String::new(),
            expanded: None,
            collapse_on_category_change: false,
        }
    }

    pub fn with_collapse_on_category_change(mut self, collapse: bool) -> Self {
        self.collapse_on_category_change = collapse;
        self
    }

    pub fn category(&self) -> CategoryKey {
        self.category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    pub fn select_category(&mut self, category: CategoryKey) {
        if self.collapse_on_category_change && category != self.category {
            self.expanded = None;
        }
        self.category = category;
    }

    pub fn toggle_expanded(&mut self, id: &'static str) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Endpoints currently visible for this selection
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Endpoint> {
        filter_endpoints(catalog.endpoints(), self.category, &self.search_term)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub selection: Selection,
    pub input_mode: InputMode,
    pub panel_focus: PanelFocus,
    /// Highlighted row in the endpoints panel
    pub endpoint_cursor: usize,
    /// Scroll offset for the details panel (lines)
    pub details_scroll: usize,
    /// Transient footer message (clipboard feedback)
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(catalog: Catalog, selection: Selection) -> Self {
        Self {
            catalog,
            selection,
            input_mode: InputMode::Normal,
            panel_focus: PanelFocus::Endpoints,
            endpoint_cursor: 0,
            details_scroll: 0,
            status_message: None,
        }
    }

    /// Endpoints matching the active category and search term
    pub fn visible_endpoints(&self) -> Vec<&Endpoint> {
        self.selection.visible(&self.catalog)
    }

    /// Number of endpoints in the active category, ignoring the search term
    pub fn category_endpoint_count(&self) -> usize {
        self.catalog.endpoints_in(self.selection.category()).len()
    }

    /// Endpoint under the cursor in the endpoints panel
    pub fn highlighted_endpoint(&self) -> Option<&Endpoint> {
        self.visible_endpoints()
            .get(self.endpoint_cursor)
            .copied()
    }

    /// The expanded endpoint, only if it is part of the visible list
    pub fn expanded_endpoint(&self) -> Option<&Endpoint> {
        let id = self.selection.expanded()?;
        self.visible_endpoints().into_iter().find(|e| e.id == id)
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status_message(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.status_message {
            if now.duration_since(*shown_at) >= STATUS_MESSAGE_TTL {
                self.status_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> AppState {
        let catalog = Catalog::builtin();
        let selection = Selection::new(catalog.first_category());
        AppState::new(catalog, selection)
    }

    #[test]
    fn test_initial_selection() {
        let state = create_test_state();
        assert_eq!(state.selection.category(), CategoryKey::Authentication);
        assert_eq!(state.selection.expanded(), None);
        assert_eq!(state.selection.search_term(), "");
    }

    #[test]
    fn test_select_category_filters_to_that_category() {
        let mut state = create_test_state();
        state.selection.set_search_term("mobile");
        state.selection.select_category(CategoryKey::Mobile);

        let ids: Vec<&str> = state.visible_endpoints().iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "mobile-functions",
                "mobile-functions-with-roles",
                "mobile-functions-by-user",
            ]
        );
        assert!(state
            .visible_endpoints()
            .iter()
            .all(|e| e.category == CategoryKey::Mobile));
    }

    #[test]
    fn test_select_category_keeps_search_and_expanded() {
        let mut selection = Selection::new(CategoryKey::Authentication);
        selection.set_search_term("auth");
        selection.toggle_expanded("auth-login");

        selection.select_category(CategoryKey::Payments);
        assert_eq!(selection.search_term(), "auth");
        assert_eq!(selection.expanded(), Some("auth-login"));
    }

    #[test]
    fn test_select_category_can_collapse() {
        let mut selection =
            Selection::new(CategoryKey::Authentication).with_collapse_on_category_change(true);
        selection.toggle_expanded("auth-login");

        // Re-selecting the active category keeps the expansion
        selection.select_category(CategoryKey::Authentication);
        assert_eq!(selection.expanded(), Some("auth-login"));

        selection.select_category(CategoryKey::Payments);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut selection = Selection::new(CategoryKey::Payments);
        selection.toggle_expanded("pay-line");
        assert_eq!(selection.expanded(), Some("pay-line"));
        selection.toggle_expanded("pay-line");
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn test_toggle_other_replaces_expanded() {
        let mut selection = Selection::new(CategoryKey::Payments);
        selection.toggle_expanded("pay-line");
        selection.toggle_expanded("sell-action");
        assert_eq!(selection.expanded(), Some("sell-action"));
    }

    #[test]
    fn test_set_search_term_leaves_other_fields() {
        let mut selection = Selection::new(CategoryKey::Mobile);
        selection.toggle_expanded("mobile-functions");
        selection.set_search_term("zzz");
        assert_eq!(selection.category(), CategoryKey::Mobile);
        assert_eq!(selection.expanded(), Some("mobile-functions"));
        assert_eq!(selection.search_term(), "zzz");
    }

    #[test]
    fn test_expanded_endpoint_hidden_when_not_visible() {
        let mut state = create_test_state();
        state.selection.toggle_expanded("auth-login");
        assert_eq!(state.expanded_endpoint().map(|e| e.id), Some("auth-login"));

        state.selection.select_category(CategoryKey::Mobile);
        assert!(state.expanded_endpoint().is_none());
        assert_eq!(state.selection.expanded(), Some("auth-login"));

        state.selection.select_category(CategoryKey::Authentication);
        state.selection.set_search_term("refresh");
        assert!(state.expanded_endpoint().is_none());
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = create_test_state();
        state.set_status_message("Copié");
        let shown_at = state.status_message.as_ref().unwrap().1;

        state.expire_status_message(shown_at);
        assert!(state.status_message.is_some());

        state.expire_status_message(shown_at + STATUS_MESSAGE_TTL);
        assert!(state.status_message.is_none());
    }
}
