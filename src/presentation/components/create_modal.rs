use ratatui::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    core::state::{ui::DraftForm, AppState},
    domain::profile::DraftField,
    presentation::{
        components::filter_bar::set_input_cursor,
        widgets::popup::{centered_rect, PopupWidget},
    },
};

const LABEL_WIDTH: usize = 15;

/// "Create Driver" form over the table.
pub struct CreateModalComponent;

impl CreateModalComponent {
    pub fn new() -> Self {
        Self
    }

    /// Text shown for `field`; the focused field shows the live input.
    pub fn field_value(form: &DraftForm, field: DraftField) -> String {
        let value = if field == form.field {
            form.input.content.as_str()
        } else {
            form.draft.get(field)
        };
        if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(form) = state.ui.form.as_ref() else {
            return;
        };
        let styles = &state.config.styles;

        let mut lines: Vec<Line> = DraftField::iter()
            .map(|field| {
                let label = format!("{:>LABEL_WIDTH$}: ", field.to_string());
                let label_style = if field == form.field {
                    styles.style("header_focused")
                } else {
                    styles.style("header")
                };
                Line::from(vec![
                    Span::styled(label, label_style),
                    Span::raw(Self::field_value(form, field)),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "<tab> next field  <ctrl-s> create  <esc> cancel",
            styles.style("muted"),
        ));

        let title = if form.submitting {
            "Create Driver (saving...)"
        } else {
            "Create Driver"
        };
        let popup = PopupWidget::new(title, lines).border_style(styles.style("modal_border"));
        let rect = centered_rect(64, popup.height(), area);
        frame.render_widget(popup, rect);

        let row = DraftField::iter()
            .position(|field| field == form.field)
            .unwrap_or(0);
        let line_area = Rect {
            x: rect.x + 1,
            y: rect.y + 1 + u16::try_from(row).unwrap_or(0),
            width: rect.width.saturating_sub(2),
            height: 1,
        };
        if line_area.y < rect.bottom().saturating_sub(1) {
            let mut input = form.input.clone();
            if form.field.is_secret() {
                input.content = "*".repeat(input.content.chars().count());
            }
            set_input_cursor(frame, line_area, &" ".repeat(LABEL_WIDTH + 2), &input);
        }
    }
}

impl Default for CreateModalComponent {
    fn default() -> Self {
        Self::new()
    }
}
