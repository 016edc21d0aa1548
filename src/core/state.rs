//! # Application State
//!
//! Core navigation state. No TUI-specific types live here; scroll offsets
//! and hit-test caches belong to the `tui` module.
//!
//! ```text
//! App
//! ├── stack: Vec<Route>        // [List] or [List, Detail(id)]
//! ├── selected: usize          // highlighted row on the list screen
//! └── status_message: String   // title bar hint text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::{self, CarId};
use crate::core::config::ResolvedConfig;
use crate::core::route::{DetailView, Route};

pub const LIST_HINT: &str = "Enter: details  q: quit";
pub const DETAIL_HINT: &str = "Esc: back  q: quit";

#[derive(Debug)]
pub struct App {
    /// Navigation stack. Never empty, never deeper than two.
    pub stack: Vec<Route>,
    pub selected: usize,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
            selected: 0,
            status_message: String::from(LIST_HINT),
        }
    }

    /// Build the initial state, opening the configured car if it exists.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new();
        if let Some(name) = config.open.as_deref() {
            match catalog::find_by_name(name) {
                Some(id) => {
                    log::info!("Opening '{}' on startup", name);
                    app.selected = id.0;
                    app.stack.push(Route::Detail(id));
                    app.status_message = String::from(DETAIL_HINT);
                }
                None => log::warn!("No car named '{}', starting on the list", name),
            }
        }
        app
    }

    pub fn current_route(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    pub fn selected_id(&self) -> CarId {
        CarId(self.selected)
    }

    /// The detail screen's content, if it is showing.
    pub fn detail(&self) -> Option<DetailView> {
        match self.current_route() {
            Route::Detail(id) => Some(DetailView::resolve(id)),
            Route::List => None,
        }
    }

    /// Text for the title bar.
    pub fn title(&self) -> &'static str {
        match self.detail() {
            Some(view) => view.title(),
            None => "Car Selector",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_config;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.stack, vec![Route::List]);
        assert_eq!(app.selected, 0);
        assert_eq!(app.status_message, LIST_HINT);
        assert_eq!(app.title(), "Car Selector");
        assert!(app.detail().is_none());
    }

    #[test]
    fn test_from_config_opens_named_car() {
        let mut config = test_config();
        config.open = Some("off roader".to_string());
        let app = App::from_config(&config);
        assert_eq!(app.current_route(), Route::Detail(CarId(7)));
        assert_eq!(app.selected, 7);
        assert_eq!(app.title(), "Off Roader");
    }

    #[test]
    fn test_from_config_unknown_name_stays_on_list() {
        let mut config = test_config();
        config.open = Some("Hovercraft".to_string());
        let app = App::from_config(&config);
        assert_eq!(app.current_route(), Route::List);
        assert_eq!(app.selected, 0);
    }
}
