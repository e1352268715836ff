use std::sync::Arc;

pub mod input;
pub mod loading;
pub mod session;
pub mod system;
pub mod table;
pub mod ui;

use crate::{domain::route::Route, infrastructure::config::Config};
use loading::LoadingState;
use session::SessionState;
use system::SystemState;
use table::TableState;
use ui::UiState;

/// Screens of the admin client
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Drivers,
    DriverDetail {
        id: String,
    },
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Drivers => Route::Drivers,
            Screen::DriverDetail { id } => Route::DriverDetail(id.clone()),
        }
    }
}

/// Unified application state
///
/// Owned by the runtime and handed to components by reference; every change
/// goes through [`crate::core::update::update`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub screen: Screen,
    pub table: TableState,
    pub loading: LoadingState,
    pub ui: UiState,
    pub session: SessionState,
    pub system: SystemState,
    pub config: Arc<Config>,
}

impl AppState {
    /// Initialize AppState from configuration
    pub fn new_with_config(config: Config) -> Self {
        Self {
            table: TableState::new(config.table.page_size),
            loading: LoadingState::new(config.loading),
            session: SessionState::new(config.api.token.is_some()),
            config: Arc::new(config),
            ..Default::default()
        }
    }

    /// Whether the drivers screen still shows the loading indicator
    pub fn is_loading(&self) -> bool {
        self.screen == Screen::Drivers && self.loading.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.screen, Screen::Drivers);
        assert_eq!(state.table.record_count(), 0);
        assert!(state.ui.is_table());
        assert!(!state.system.should_quit);
        assert!(state.is_loading());
    }

    #[test]
    fn test_app_state_uses_config() {
        let mut config = Config::default();
        config.table.page_size = 25;
        let state = AppState::new_with_config(config);

        assert_eq!(state.table.page_size(), 25);
        assert!(!state.session.has_token);
    }

    #[test]
    fn test_detail_screen_is_never_loading() {
        let state = AppState {
            screen: Screen::DriverDetail {
                id: "d-1".to_string(),
            },
            ..Default::default()
        };
        assert!(!state.is_loading());
        assert_eq!(state.screen.route().path(), "/admin/driver/d-1");
    }
}
