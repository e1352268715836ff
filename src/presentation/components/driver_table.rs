//! Drivers table
//!
//! Renders the current [`TableProjection`]: a header with sort and filter
//! markers, one row per driver on the page, and a footer with the selection
//! count and the paging controls.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    core::state::{
        table::{SortDirection, TableProjection},
        AppState,
    },
    domain::{
        column::ColumnId,
        text::{fit_width, format_count},
    },
    presentation::widgets::pager::PagerWidget,
};

const MARKER_WIDTH: u16 = 3;
const COLUMN_SPACING: u16 = 1;

pub struct DriverTableComponent;

impl DriverTableComponent {
    pub fn new() -> Self {
        Self
    }

    /// Header text of `column`: label, sort marker (with its rank when
    /// sorting by several columns) and a `*` while a column filter is set.
    pub fn header_label(state: &AppState, column: ColumnId) -> String {
        let mut label = column.header().to_string();
        let sort = &state.table.view().sort;
        if let Some(rank) = sort.iter().position(|key| key.column == column) {
            label.push(' ');
            label.push(match sort[rank].direction {
                SortDirection::Asc => '▲',
                SortDirection::Desc => '▼',
            });
            if sort.len() > 1 {
                label.push_str(&(rank + 1).to_string());
            }
        }
        if state.table.column_filter(column).is_some() {
            label.push('*');
        }
        label
    }

    fn constraints(columns: &[ColumnId]) -> Vec<Constraint> {
        std::iter::once(Constraint::Length(MARKER_WIDTH))
            .chain(columns.iter().map(|c| Constraint::Fill(c.width_percent())))
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        let projection = state.table.projection();

        self.view_table(state, &projection, frame, layout[0]);
        self.view_footer(state, &projection, frame, layout[1]);
    }

    fn view_table(
        &self,
        state: &AppState,
        projection: &TableProjection,
        frame: &mut Frame,
        area: Rect,
    ) {
        let styles = &state.config.styles;
        let block = Block::default().borders(Borders::ALL).title(" Drivers ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints = Self::constraints(&projection.columns);
        let widths: Vec<usize> = Layout::horizontal(constraints.clone())
            .spacing(COLUMN_SPACING)
            .split(inner)
            .iter()
            .map(|rect| usize::from(rect.width))
            .collect();

        let focused = state.table.focused_column();
        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(projection.columns.iter().zip(&widths[1..]).map(|(column, width)| {
                    let style = if *column == focused {
                        styles.style("header_focused")
                    } else {
                        styles.style("header")
                    };
                    Cell::from(fit_width(&Self::header_label(state, *column), *width)).style(style)
                })),
        );

        let cursor = state.table.cursor();
        let rows = projection.rows.iter().enumerate().map(|(i, row)| {
            let marker = if row.selected { "[x]" } else { "[ ]" };
            let cells = std::iter::once(Cell::from(marker)).chain(
                row.cells
                    .iter()
                    .zip(&widths[1..])
                    .map(|(cell, width)| Cell::from(fit_width(cell, *width))),
            );
            let mut style = Style::default();
            if row.selected {
                style = style.patch(styles.style("selected"));
            }
            if i == cursor {
                style = style.patch(styles.style("cursor"));
            }
            Row::new(cells).style(style)
        });

        let table = Table::new(rows, constraints)
            .header(header)
            .column_spacing(COLUMN_SPACING);
        frame.render_widget(table, inner);

        if projection.rows.is_empty() && inner.height > 1 {
            // One row spanning every visible column, below the header.
            let placeholder = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new("No results.")
                    .style(styles.style("placeholder"))
                    .alignment(Alignment::Center),
                placeholder,
            );
        }
    }

    fn view_footer(
        &self,
        state: &AppState,
        projection: &TableProjection,
        frame: &mut Frame,
        area: Rect,
    ) {
        let layout = Layout::horizontal([Constraint::Min(0), Constraint::Length(36)]).split(area);

        let selection = format!(
            "{} of {} row(s) selected.",
            format_count(state.table.selected_count()),
            format_count(projection.matching_rows)
        );
        frame.render_widget(
            Paragraph::new(selection).style(state.config.styles.style("muted")),
            layout[0],
        );

        let pager = PagerWidget::new(projection.page_index, projection.page_count)
            .disabled_style(state.config.styles.style("muted"));
        frame.render_widget(pager, layout[1]);
    }
}

impl Default for DriverTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::table::TableMsg;
    use crate::core::state::table::SortKey;
    use crate::infrastructure::tui::test::buffer_text;
    use crate::test_helpers::{generated_drivers, loaded_state, sample_drivers};
    use ratatui::backend::TestBackend;

    fn render(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| DriverTableComponent::new().view(state, frame, frame.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_rows_render_status_and_lowercased_email() {
        let state = loaded_state(sample_drivers());
        let text = render(&state, 140, 12);

        assert!(text.contains("Full Name"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("ada@fleet.io"));
        assert!(!text.contains("Ada@Fleet.io"));
        assert!(text.contains("Has Vehicle"));
        assert!(text.contains("No Vehicle"));
        assert!(text.contains("0 of 5 row(s) selected."));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn test_empty_projection_shows_placeholder() {
        let mut state = loaded_state(sample_drivers());
        state
            .table
            .update(TableMsg::SetGlobalFilter("nobody".to_string()));
        let text = render(&state, 140, 10);

        assert!(text.contains("No results."));
        assert!(text.contains("0 of 0 row(s) selected."));
    }

    #[test]
    fn test_hidden_column_is_not_rendered() {
        let mut state = loaded_state(sample_drivers());
        state
            .table
            .update(TableMsg::ToggleColumnVisibility(ColumnId::Email));
        let text = render(&state, 140, 10);

        assert!(!text.contains("Email"));
        assert!(!text.contains("bob@fleet.io"));
        assert!(text.contains("Bob Smith"));
    }

    #[test]
    fn test_sort_markers() {
        let mut state = loaded_state(sample_drivers());
        state.table.set_sort(vec![SortKey::desc(ColumnId::FullName)]);
        assert_eq!(
            DriverTableComponent::header_label(&state, ColumnId::FullName),
            "Full Name ▼"
        );

        state.table.set_sort(vec![
            SortKey::asc(ColumnId::VehicleStatus),
            SortKey::desc(ColumnId::FullName),
        ]);
        assert_eq!(
            DriverTableComponent::header_label(&state, ColumnId::FullName),
            "Full Name ▼2"
        );
        assert_eq!(
            DriverTableComponent::header_label(&state, ColumnId::VehicleStatus),
            "Status ▲1"
        );
    }

    #[test]
    fn test_filtered_column_is_marked() {
        let mut state = loaded_state(sample_drivers());
        state
            .table
            .set_column_filter(ColumnId::Email, "depot".to_string());
        assert_eq!(
            DriverTableComponent::header_label(&state, ColumnId::Email),
            "Email*"
        );
    }

    #[test]
    fn test_only_current_page_is_rendered() {
        let state = loaded_state(generated_drivers(25));
        let text = render(&state, 140, 16);

        assert!(text.contains("Name009 Driver"));
        assert!(!text.contains("Name010 Driver"));
        assert!(text.contains("Page 1 of 3"));
    }
}
