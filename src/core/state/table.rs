//! Drivers table view model
//!
//! [`TableState`] owns the fetched records and the [`ViewState`] (sorting,
//! filters, column visibility, selection, paging). Everything rendered is
//! derived through [`TableState::projection`]; the records themselves are
//! never touched by sorting or filtering.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::core::{cmd::Cmd, msg::table::TableMsg};
use crate::domain::{column::ColumnId, driver::Driver, text::natural_cmp};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column: ColumnId) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: ColumnId) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDirection {
    Previous,
    Next,
}

/// Returned when paging would leave the valid page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    NoPreviousPage,
    NoNextPage,
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingError::NoPreviousPage => f.write_str("already on the first page"),
            PagingError::NoNextPage => f.write_str("already on the last page"),
        }
    }
}

impl std::error::Error for PagingError {}

/// Client-held configuration that, together with the records, determines
/// what is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub sort: Vec<SortKey>,
    pub column_filters: BTreeMap<ColumnId, String>,
    /// Missing entries are visible.
    pub column_visibility: BTreeMap<ColumnId, bool>,
    pub row_selection: BTreeSet<String>,
    pub global_filter: String,
    pub page_index: usize,
}

/// One rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    pub id: String,
    pub cells: Vec<String>,
    pub selected: bool,
}

/// The visible slice of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProjection {
    pub columns: Vec<ColumnId>,
    pub rows: Vec<ProjectedRow>,
    /// Rows left after filtering, across all pages.
    pub matching_rows: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub can_previous_page: bool,
    pub can_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    records: Arc<Vec<Driver>>,
    view: ViewState,
    page_size: usize,
    /// Row cursor relative to the current page.
    cursor: usize,
    focused_column: ColumnId,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Arc::new(Vec::new()),
            view: ViewState::default(),
            page_size: page_size.max(1),
            cursor: 0,
            focused_column: ColumnId::VehicleStatus,
        }
    }

    pub fn update(&mut self, msg: TableMsg) -> Vec<Cmd> {
        match msg {
            TableMsg::SetSort(spec) => self.set_sort(spec),
            TableMsg::ToggleSort { column, multi } => self.toggle_sort(column, multi),
            TableMsg::ToggleSortFocused { multi } => self.toggle_sort(self.focused_column, multi),
            TableMsg::ClearSort => self.set_sort(vec![]),
            TableMsg::SetColumnFilter { column, value } => self.set_column_filter(column, value),
            TableMsg::SetGlobalFilter(value) => self.set_global_filter(value),
            TableMsg::SetColumnVisibility { column, visible } => {
                self.set_column_visibility(column, visible)
            }
            TableMsg::ToggleColumnVisibility(column) => {
                let visible = !self.is_visible(column);
                self.set_column_visibility(column, visible);
            }
            TableMsg::Page(direction) => {
                if let Err(e) = self.set_page(direction) {
                    log::debug!("Paging ignored: {e}");
                }
            }
            TableMsg::SetRowSelection(ids) => self.set_row_selection(ids),
            TableMsg::ToggleRowSelection => self.toggle_cursor_selection(),
            TableMsg::ToggleSelectAll => self.toggle_select_all(),
            TableMsg::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            TableMsg::CursorDown => {
                if self.cursor + 1 < self.page_rows_len() {
                    self.cursor += 1;
                }
            }
            TableMsg::FocusNextColumn => self.move_focus(true),
            TableMsg::FocusPreviousColumn => self.move_focus(false),
        }
        vec![]
    }

    pub fn records(&self) -> &[Driver] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused_column(&self) -> ColumnId {
        self.focused_column
    }

    pub fn find(&self, id: &str) -> Option<&Driver> {
        self.records.iter().find(|driver| driver.id == id)
    }

    /// Replaces the records wholesale. View state is kept.
    pub fn set_records(&mut self, records: Vec<Driver>) {
        self.records = Arc::new(records);
        self.reset_page();
    }

    /// Replaces the sort specification. Non-data columns and repeated
    /// columns are dropped, first occurrence wins.
    pub fn set_sort(&mut self, spec: Vec<SortKey>) {
        let mut seen = BTreeSet::new();
        self.view.sort = spec
            .into_iter()
            .filter(|key| key.column.is_data() && seen.insert(key.column))
            .collect();
        self.reset_page();
    }

    /// Header-click semantics: ascending unless the column is currently
    /// ascending. `multi` keeps the other keys.
    pub fn toggle_sort(&mut self, column: ColumnId, multi: bool) {
        if !column.is_data() {
            return;
        }
        let direction = match self.sort_direction(column) {
            Some(SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        let key = SortKey { column, direction };

        let spec = if multi {
            let mut spec = self.view.sort.clone();
            match spec.iter_mut().find(|existing| existing.column == column) {
                Some(existing) => *existing = key,
                None => spec.push(key),
            }
            spec
        } else {
            vec![key]
        };
        self.set_sort(spec);
    }

    pub fn sort_direction(&self, column: ColumnId) -> Option<SortDirection> {
        self.view
            .sort
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// An empty value removes the column's filter.
    pub fn set_column_filter(&mut self, column: ColumnId, value: String) {
        if !column.is_data() {
            return;
        }
        if value.is_empty() {
            self.view.column_filters.remove(&column);
        } else {
            self.view.column_filters.insert(column, value);
        }
        self.reset_page();
    }

    pub fn column_filter(&self, column: ColumnId) -> Option<&str> {
        self.view.column_filters.get(&column).map(String::as_str)
    }

    pub fn set_global_filter(&mut self, value: String) {
        self.view.global_filter = value;
        self.reset_page();
    }

    pub fn global_filter(&self) -> &str {
        &self.view.global_filter
    }

    /// Pinned columns ignore the request.
    pub fn set_column_visibility(&mut self, column: ColumnId, visible: bool) {
        if !column.is_hideable() {
            return;
        }
        self.view.column_visibility.insert(column, visible);
        if !visible && self.focused_column == column {
            self.move_focus(true);
        }
    }

    pub fn is_visible(&self, column: ColumnId) -> bool {
        !column.is_hideable() || self.view.column_visibility.get(&column).copied().unwrap_or(true)
    }

    pub fn visible_columns(&self) -> Vec<ColumnId> {
        ColumnId::iter().filter(|c| self.is_visible(*c)).collect()
    }

    /// Moves one page. At either boundary the state is left as is.
    pub fn set_page(&mut self, direction: PageDirection) -> Result<usize, PagingError> {
        match direction {
            PageDirection::Previous if !self.can_previous_page() => {
                Err(PagingError::NoPreviousPage)
            }
            PageDirection::Next if !self.can_next_page() => Err(PagingError::NoNextPage),
            PageDirection::Previous => {
                self.view.page_index -= 1;
                self.cursor = 0;
                Ok(self.view.page_index)
            }
            PageDirection::Next => {
                self.view.page_index += 1;
                self.cursor = 0;
                Ok(self.view.page_index)
            }
        }
    }

    pub fn page_index(&self) -> usize {
        self.view.page_index
    }

    pub fn page_count(&self) -> usize {
        self.matching_indices().len().div_ceil(self.page_size).max(1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.view.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.view.page_index + 1 < self.page_count()
    }

    /// Selection is kept by id, independently of what is currently shown.
    pub fn set_row_selection(&mut self, ids: impl IntoIterator<Item = String>) {
        self.view.row_selection = ids.into_iter().collect();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.view.row_selection.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.view.row_selection.len()
    }

    /// Driver under the row cursor on the current page.
    pub fn cursor_driver(&self) -> Option<&Driver> {
        let start = self.view.page_index * self.page_size;
        self.matching_indices()
            .get(start + self.cursor)
            .map(|&i| &self.records[i])
    }

    /// Indices into the records of every row that passes the filters, in
    /// sorted order.
    pub fn matching_indices(&self) -> Vec<usize> {
        let global = self.view.global_filter.to_lowercase();
        let column_filters: Vec<(ColumnId, String)> = self
            .view
            .column_filters
            .iter()
            .map(|(column, value)| (*column, value.to_lowercase()))
            .collect();

        let mut indices: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, driver)| {
                column_filters.iter().all(|(column, needle)| {
                    column.raw_value(driver).to_lowercase().contains(needle)
                })
            })
            .filter(|(_, driver)| matches_global(driver, &global))
            .map(|(i, _)| i)
            .collect();

        if !self.view.sort.is_empty() {
            let keys: Vec<(ColumnId, SortDirection)> = self
                .view
                .sort
                .iter()
                .map(|key| (key.column, key.direction))
                .collect();
            // `sort_by` is stable, so equal rows keep fetch order.
            indices.sort_by(|&a, &b| compare_rows(&self.records[a], &self.records[b], &keys));
        }
        indices
    }

    pub fn projection(&self) -> TableProjection {
        let columns = self.visible_columns();
        let matching = self.matching_indices();
        let start = self.view.page_index * self.page_size;
        let rows = matching
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| {
                let driver = &self.records[i];
                ProjectedRow {
                    id: driver.id.clone(),
                    cells: columns.iter().map(|c| c.render(driver)).collect(),
                    selected: self.is_selected(&driver.id),
                }
            })
            .collect();

        TableProjection {
            columns,
            rows,
            matching_rows: matching.len(),
            page_index: self.view.page_index,
            page_count: self.page_count(),
            can_previous_page: self.can_previous_page(),
            can_next_page: self.can_next_page(),
        }
    }

    fn page_rows_len(&self) -> usize {
        let start = self.view.page_index * self.page_size;
        self.matching_indices()
            .len()
            .saturating_sub(start)
            .min(self.page_size)
    }

    fn reset_page(&mut self) {
        self.view.page_index = 0;
        self.cursor = 0;
    }

    fn toggle_cursor_selection(&mut self) {
        let Some(id) = self.cursor_driver().map(|driver| driver.id.clone()) else {
            return;
        };
        if !self.view.row_selection.remove(&id) {
            self.view.row_selection.insert(id);
        }
    }

    fn toggle_select_all(&mut self) {
        let ids: Vec<String> = self
            .matching_indices()
            .into_iter()
            .map(|i| self.records[i].id.clone())
            .collect();
        if !ids.is_empty() && ids.iter().all(|id| self.is_selected(id)) {
            for id in &ids {
                self.view.row_selection.remove(id);
            }
        } else {
            self.view.row_selection.extend(ids);
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let columns = self.visible_columns();
        let Some(current) = columns.iter().position(|c| *c == self.focused_column) else {
            // Focused column was just hidden: pick the nearest visible one after it.
            self.focused_column = columns
                .iter()
                .copied()
                .find(|c| *c > self.focused_column)
                .or_else(|| columns.first().copied())
                .unwrap_or(ColumnId::Actions);
            return;
        };
        let len = columns.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focused_column = columns[next];
    }
}

fn matches_global(driver: &Driver, needle: &str) -> bool {
    needle.is_empty()
        || ColumnId::data_columns()
            .filter(|column| column.is_globally_filterable())
            .any(|column| column.render(driver).to_lowercase().contains(needle))
}

fn compare_rows(a: &Driver, b: &Driver, keys: &[(ColumnId, SortDirection)]) -> Ordering {
    for (column, direction) in keys {
        let ordering = natural_cmp(&column.raw_value(a), &column.raw_value(b));
        let ordering = match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ada_and_bob() -> Vec<Driver> {
        vec![
            Driver::new("1", "Ada", "Lovelace")
                .email("A@X.com")
                .has_vehicle(true),
            Driver::new("2", "Bob", "Smith").email("b@y.com"),
        ]
    }

    fn many(n: usize) -> Vec<Driver> {
        (0..n)
            .map(|i| Driver::new(format!("d{i}"), format!("Name{i:02}"), "Driver"))
            .collect()
    }

    fn table_with(records: Vec<Driver>) -> TableState {
        let mut table = TableState::default();
        table.set_records(records);
        table
    }

    fn row_ids(table: &TableState) -> Vec<String> {
        table.projection().rows.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_projection_renders_computed_columns() {
        let table = table_with(ada_and_bob());
        let projection = table.projection();

        assert_eq!(
            projection.columns,
            vec![
                ColumnId::VehicleStatus,
                ColumnId::FullName,
                ColumnId::Email,
                ColumnId::DrivingLicenseCode,
                ColumnId::Phone,
                ColumnId::Actions,
            ]
        );
        assert_eq!(projection.rows[0].cells[0], "Has Vehicle");
        assert_eq!(projection.rows[0].cells[1], "Ada Lovelace");
        assert_eq!(projection.rows[0].cells[2], "a@x.com");
        assert_eq!(projection.rows[1].cells[0], "No Vehicle");
        assert_eq!(projection.rows[1].cells[1], "Bob Smith");
        assert_eq!(projection.rows[1].cells[2], "b@y.com");
    }

    #[test]
    fn test_global_filter() {
        let mut table = table_with(ada_and_bob());

        table.set_global_filter(String::from("ada"));
        assert_eq!(row_ids(&table), vec!["1"]);

        table.set_global_filter(String::from("zzz"));
        assert!(table.projection().rows.is_empty());
        assert_eq!(table.projection().matching_rows, 0);

        table.set_global_filter(String::new());
        assert_eq!(row_ids(&table), vec!["1", "2"]);
    }

    #[test]
    fn test_global_filter_skips_vehicle_status() {
        let mut table = table_with(ada_and_bob());
        table.set_global_filter(String::from("vehicle"));
        assert!(row_ids(&table).is_empty());

        // The column filter still reaches it.
        table.set_global_filter(String::new());
        table.set_column_filter(ColumnId::VehicleStatus, String::from("has"));
        assert_eq!(row_ids(&table), vec!["1"]);
    }

    #[test]
    fn test_sort_orders_digit_runs_numerically() {
        let records = vec![
            Driver::new("a", "Name10", "X"),
            Driver::new("b", "Name2", "X"),
            Driver::new("c", "name1", "X"),
        ];
        let mut table = table_with(records);

        table.set_sort(vec![SortKey::asc(ColumnId::FullName)]);
        assert_eq!(row_ids(&table), vec!["c", "b", "a"]);

        table.set_sort(vec![SortKey::desc(ColumnId::FullName)]);
        assert_eq!(row_ids(&table), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_global_filter_ignores_column_visibility() {
        let mut table = table_with(ada_and_bob());
        table.set_global_filter(String::from("y.com"));
        assert_eq!(row_ids(&table), vec!["2"]);

        table.set_column_visibility(ColumnId::Email, false);
        assert_eq!(row_ids(&table), vec!["2"]);
    }

    #[test]
    fn test_column_filter_matches_raw_value() {
        let mut table = table_with(ada_and_bob());

        table.set_column_filter(ColumnId::Email, String::from("A@X"));
        assert_eq!(row_ids(&table), vec!["1"]);

        table.set_column_filter(ColumnId::Email, String::new());
        assert_eq!(table.column_filter(ColumnId::Email), None);
        assert_eq!(row_ids(&table), vec!["1", "2"]);
    }

    #[test]
    fn test_column_filters_combine() {
        let mut table = table_with(ada_and_bob());
        table.set_column_filter(ColumnId::VehicleStatus, String::from("no vehicle"));
        table.set_column_filter(ColumnId::FullName, String::from("ada"));
        assert!(row_ids(&table).is_empty());
    }

    #[test]
    fn test_hiding_column_keeps_data_and_filter_results() {
        let mut table = table_with(ada_and_bob());
        table.set_global_filter(String::from("ada"));
        table.set_column_visibility(ColumnId::Email, false);

        let projection = table.projection();
        assert!(!projection.columns.contains(&ColumnId::Email));
        assert_eq!(projection.rows[0].cells.len(), 5);
        assert!(!projection.rows[0].cells.contains(&String::from("a@x.com")));
        assert_eq!(table.record_count(), 2);
        assert_eq!(projection.matching_rows, 1);
    }

    #[test]
    fn test_actions_column_cannot_be_hidden() {
        let mut table = table_with(ada_and_bob());
        table.set_column_visibility(ColumnId::Actions, false);
        assert!(table.is_visible(ColumnId::Actions));
    }

    #[test]
    fn test_sort_is_stable_and_multi_key() {
        let records = vec![
            Driver::new("1", "Cid", "B").has_vehicle(true),
            Driver::new("2", "Ann", "A"),
            Driver::new("3", "Bea", "A").has_vehicle(true),
            Driver::new("4", "Ann", "A"),
        ];
        let mut table = table_with(records);

        table.set_sort(vec![SortKey::asc(ColumnId::VehicleStatus)]);
        assert_eq!(row_ids(&table), vec!["1", "3", "2", "4"]);

        table.set_sort(vec![
            SortKey::desc(ColumnId::VehicleStatus),
            SortKey::asc(ColumnId::FullName),
        ]);
        assert_eq!(row_ids(&table), vec!["2", "4", "3", "1"]);

        // Raw records stay in fetch order.
        let ids: Vec<&str> = table.records().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_set_sort_drops_duplicates_and_actions() {
        let mut table = TableState::default();
        table.set_sort(vec![
            SortKey::asc(ColumnId::Email),
            SortKey::desc(ColumnId::Email),
            SortKey::asc(ColumnId::Actions),
        ]);
        assert_eq!(table.view().sort, vec![SortKey::asc(ColumnId::Email)]);
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut table = TableState::default();
        table.toggle_sort(ColumnId::Email, false);
        assert_eq!(table.sort_direction(ColumnId::Email), Some(SortDirection::Asc));
        table.toggle_sort(ColumnId::Email, false);
        assert_eq!(table.sort_direction(ColumnId::Email), Some(SortDirection::Desc));
        table.toggle_sort(ColumnId::Email, false);
        assert_eq!(table.sort_direction(ColumnId::Email), Some(SortDirection::Asc));

        table.toggle_sort(ColumnId::FullName, true);
        assert_eq!(
            table.view().sort,
            vec![SortKey::asc(ColumnId::Email), SortKey::asc(ColumnId::FullName)]
        );

        table.toggle_sort(ColumnId::Phone, false);
        assert_eq!(table.view().sort, vec![SortKey::asc(ColumnId::Phone)]);
    }

    #[test]
    fn test_paging_boundaries() {
        let mut table = table_with(many(25));
        assert_eq!(table.page_count(), 3);
        assert!(!table.can_previous_page());
        assert!(table.can_next_page());

        assert_eq!(
            table.set_page(PageDirection::Previous),
            Err(PagingError::NoPreviousPage)
        );
        assert_eq!(table.page_index(), 0);

        assert_eq!(table.set_page(PageDirection::Next), Ok(1));
        assert_eq!(table.set_page(PageDirection::Next), Ok(2));
        assert!(!table.can_next_page());
        assert_eq!(table.projection().rows.len(), 5);

        assert_eq!(table.set_page(PageDirection::Next), Err(PagingError::NoNextPage));
        assert_eq!(table.page_index(), 2);
    }

    #[test]
    fn test_single_page_cannot_move() {
        let mut table = table_with(ada_and_bob());
        let projection = table.projection();
        assert_eq!(projection.page_count, 1);
        assert!(!projection.can_previous_page);
        assert!(!projection.can_next_page);
        assert!(table.set_page(PageDirection::Next).is_err());
        assert!(table.set_page(PageDirection::Previous).is_err());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut table = table_with(many(25));
        table.set_page(PageDirection::Next).ok();
        table.set_global_filter(String::from("name1"));
        assert_eq!(table.page_index(), 0);
        assert_eq!(table.projection().matching_rows, 10);
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut table = table_with(ada_and_bob());
        table.set_row_selection(vec![String::from("2")]);

        table.set_global_filter(String::from("ada"));
        assert!(table.projection().rows.iter().all(|r| !r.selected));
        assert_eq!(table.selected_count(), 1);

        table.set_global_filter(String::new());
        let rows = table.projection().rows;
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
    }

    #[test]
    fn test_toggle_selection_at_cursor_and_all() {
        let mut table = table_with(ada_and_bob());
        table.update(TableMsg::CursorDown);
        table.update(TableMsg::ToggleRowSelection);
        assert!(table.is_selected("2"));

        table.update(TableMsg::ToggleSelectAll);
        assert_eq!(table.selected_count(), 2);
        table.update(TableMsg::ToggleSelectAll);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_cursor_stays_within_page() {
        let mut table = table_with(ada_and_bob());
        table.update(TableMsg::CursorUp);
        assert_eq!(table.cursor(), 0);
        for _ in 0..5 {
            table.update(TableMsg::CursorDown);
        }
        assert_eq!(table.cursor(), 1);
        assert_eq!(table.cursor_driver().map(|d| d.id.as_str()), Some("2"));
    }

    #[test]
    fn test_focus_skips_hidden_columns() {
        let mut table = TableState::default();
        table.set_column_visibility(ColumnId::FullName, false);
        table.update(TableMsg::FocusNextColumn);
        assert_eq!(table.focused_column(), ColumnId::Email);

        table.set_column_visibility(ColumnId::Email, false);
        assert_eq!(table.focused_column(), ColumnId::DrivingLicenseCode);

        table.update(TableMsg::FocusPreviousColumn);
        assert_eq!(table.focused_column(), ColumnId::VehicleStatus);
        table.update(TableMsg::FocusPreviousColumn);
        assert_eq!(table.focused_column(), ColumnId::Actions);
    }
}
