//! Popup menus of the drivers screen

use ratatui::prelude::*;

use crate::{
    core::state::{ui::RowAction, AppState},
    domain::column::ColumnId,
    presentation::widgets::popup::{centered_rect, PopupWidget},
};

/// Checkbox list of the hideable columns, anchored to the top right.
pub struct ColumnMenuComponent;

impl ColumnMenuComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn items(state: &AppState) -> Vec<String> {
        ColumnId::hideable_columns()
            .map(|column| {
                let mark = if state.table.is_visible(column) { "x" } else { " " };
                format!("[{mark}] {}", column.header())
            })
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let popup = PopupWidget::new("Columns", menu_lines(state, Self::items(state)))
            .border_style(state.config.styles.style("modal_border"));
        let width = 24.min(area.width);
        let rect = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: popup.height().min(area.height),
        };
        frame.render_widget(popup, rect);
    }
}

impl Default for ColumnMenuComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-row actions for the driver under the cursor.
pub struct ActionMenuComponent;

impl ActionMenuComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let items = RowAction::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect();
        let popup = PopupWidget::new("Actions", menu_lines(state, items))
            .border_style(state.config.styles.style("modal_border"));
        let rect = centered_rect(28, popup.height(), area);
        frame.render_widget(popup, rect);
    }
}

impl Default for ActionMenuComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn menu_lines(state: &AppState, items: Vec<String>) -> Vec<Line<'static>> {
    let cursor_style = state.config.styles.style("cursor");
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if i == state.ui.menu_cursor {
                Line::styled(item, cursor_style)
            } else {
                Line::raw(item)
            }
        })
        .collect()
}
