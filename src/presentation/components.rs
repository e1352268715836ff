//! Component collection
//!
//! Components are stateless renderers: they receive the state snapshot by
//! reference and never change it.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::UiMode, AppState, Screen},
    presentation::widgets::status_bar::{StatusBarWidget, ViewContext as StatusBarViewContext},
};

pub mod create_modal;
pub mod driver_detail;
pub mod driver_table;
pub mod filter_bar;
pub mod loading;
pub mod menus;

pub use create_modal::CreateModalComponent;
pub use driver_detail::DriverDetailComponent;
pub use driver_table::DriverTableComponent;
pub use filter_bar::FilterBarComponent;
pub use loading::LoadingComponent;
pub use menus::{ActionMenuComponent, ColumnMenuComponent};

/// Collection of all components
pub struct Components {
    pub loading: LoadingComponent,
    pub filter_bar: FilterBarComponent,
    pub driver_table: DriverTableComponent,
    pub column_menu: ColumnMenuComponent,
    pub action_menu: ActionMenuComponent,
    pub create_modal: CreateModalComponent,
    pub driver_detail: DriverDetailComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            loading: LoadingComponent::new(),
            filter_bar: FilterBarComponent::new(),
            driver_table: DriverTableComponent::new(),
            column_menu: ColumnMenuComponent::new(),
            action_menu: ActionMenuComponent::new(),
            create_modal: CreateModalComponent::new(),
            driver_detail: DriverDetailComponent::new(),
        }
    }

    /// Render all components
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Screen
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        match &state.screen {
            Screen::Drivers if state.is_loading() => {
                self.loading.view(state, frame, layout[0]);
            }
            Screen::Drivers => self.render_drivers(frame, state, layout[0]),
            Screen::DriverDetail { id } => {
                self.driver_detail.view(state, id, frame, layout[0]);
            }
        }

        let table = &state.table;
        let status_bar_ctx = StatusBarViewContext {
            total: table.record_count(),
            matching: table.matching_indices().len(),
            selected: table.selected_count(),
            page_index: table.page_index(),
            page_count: table.page_count(),
            session: state.session.label(),
        };
        let status_bar = StatusBarWidget::new(status_bar_ctx, state.system.status_message.as_deref())
            .style(state.config.styles.style("status"));
        frame.render_widget(status_bar, layout[1]);
    }

    fn render_drivers(&mut self, frame: &mut Frame, state: &AppState, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

        self.filter_bar.view(state, frame, layout[0]);
        self.driver_table.view(state, frame, layout[1]);

        match &state.ui.mode {
            UiMode::ColumnMenu => self.column_menu.view(state, frame, layout[1]),
            UiMode::ActionMenu(_) => self.action_menu.view(state, frame, layout[1]),
            UiMode::CreateModal => self.create_modal.view(state, frame, area),
            UiMode::Table | UiMode::GlobalFilter | UiMode::ColumnFilter(_) => {}
        }
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
