use crate::catalog::Catalog;
use crate::config::Config;
use crate::state::{AppState, Selection};
use crate::types::CategoryKey;
use crate::ui::{self, draw};
use chrono::Datelike;
use color_eyre::Result;
use ratatui::{widgets::ListState, DefaultTerminal};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: AppState,
    list_state: ListState,
    event_handler: ui::EventHandler,
    year: i32,
}

impl App {
    /// Build the browser state from the config, with CLI overrides applied on top
    pub fn new(config: &Config, category: Option<CategoryKey>, search: Option<String>) -> Self {
        let catalog = Catalog::builtin();

        let category = category
            .or(config.browser.initial_category)
            .unwrap_or_else(|| catalog.first_category());

        let mut selection = Selection::new(category)
            .with_collapse_on_category_change(config.browser.collapse_on_category_change);
        if let Some(term) = search {
            selection.set_search_term(term);
        }

        Self {
            state: AppState::new(catalog, selection),
            list_state: ListState::default(),
            event_handler: ui::EventHandler::new(),
            year: chrono::Local::now().year(),
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        tracing::info!(category = %self.state.selection.category(), "starting browser");

        while !self.event_handler.should_quit {
            self.state.expire_status_message(Instant::now());

            terminal.draw(|frame| {
                draw::render(frame, &self.state, &mut self.list_state, self.year)
            })?;

            self.event_handler.handle_events(&mut self.state)?;
        }

        tracing::info!("browser closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        config.browser.initial_category = Some(CategoryKey::Password);

        let app = App::new(&config, None, None);
        assert_eq!(app.state.selection.category(), CategoryKey::Password);

        let app = App::new(&config, Some(CategoryKey::Mobile), Some("login".to_string()));
        assert_eq!(app.state.selection.category(), CategoryKey::Mobile);
        assert_eq!(app.state.selection.search_term(), "login");
    }

    #[test]
    fn test_defaults_to_first_category() {
        let app = App::new(&Config::default(), None, None);
        assert_eq!(app.state.selection.category(), CategoryKey::Authentication);
        assert!(app.year >= 2024);
    }
}
