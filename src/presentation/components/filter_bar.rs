use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{input::InputState, ui::UiMode, AppState};

const HINT: &str = "/ filter  c columns  n new driver";

/// Top line of the drivers screen: the global filter, or the column filter
/// being edited, plus a short key hint.
pub struct FilterBarComponent;

impl FilterBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Prompt shown before the filter text.
    pub fn prompt(state: &AppState) -> String {
        match &state.ui.mode {
            UiMode::ColumnFilter(column) => format!("Filter {}: ", column.header()),
            _ => "Filter: ".to_string(),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.styles;
        let layout = Layout::horizontal([Constraint::Min(0), Constraint::Length(36)]).split(area);
        let prompt = Self::prompt(state);

        let line = if state.ui.is_editing_filter() {
            let input = &state.ui.input;
            set_input_cursor(frame, layout[0], &prompt, input);
            Line::from(vec![
                Span::styled(prompt, styles.style("header_focused")),
                Span::raw(input.content.clone()),
            ])
        } else if state.table.global_filter().is_empty() {
            Line::from(vec![
                Span::raw(prompt),
                Span::styled("Filter drivers...", styles.style("placeholder")),
            ])
        } else {
            Line::from(vec![
                Span::raw(prompt),
                Span::raw(state.table.global_filter().to_string()),
            ])
        };

        frame.render_widget(Paragraph::new(line), layout[0]);
        frame.render_widget(
            Paragraph::new(HINT)
                .style(styles.style("muted"))
                .alignment(Alignment::Right),
            layout[1],
        );
    }
}

impl Default for FilterBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Places the terminal cursor inside an input drawn after `prefix` at the
/// start of `area`.
pub fn set_input_cursor(frame: &mut Frame, area: Rect, prefix: &str, input: &InputState) {
    let before: String = input.content.chars().take(input.cursor).collect();
    let offset = prefix.width() + before.width();
    let x = area
        .x
        .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
        .min(area.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, area.y));
}
