use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{core::state::AppState, domain::route::Route};

/// Detail screen for one driver. Only shows what the last fetch returned.
pub struct DriverDetailComponent;

impl DriverDetailComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(state: &AppState, id: &str) -> Vec<Line<'static>> {
        let styles = &state.config.styles;
        let route = Route::DriverDetail(id.to_string());
        let mut lines = vec![
            Line::styled(route.path(), styles.style("muted")),
            Line::raw(""),
        ];

        match state.table.find(id) {
            Some(driver) => {
                let field = |label: &str, value: String| {
                    Line::from(vec![
                        Span::styled(format!("{label:>14}: "), styles.style("header")),
                        Span::raw(value),
                    ])
                };
                lines.push(field("ID", driver.id.clone()));
                lines.push(field("Full name", driver.full_name()));
                lines.push(field("Email", driver.display_email()));
                lines.push(field("Phone", driver.phone.clone()));
                lines.push(field("License code", driver.driving_license_code.clone()));
                lines.push(field("Vehicle", driver.vehicle_status().to_string()));
            }
            None => lines.push(Line::styled("Driver not found", styles.style("placeholder"))),
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled("<esc> back  y copy id", styles.style("muted")));
        lines
    }

    pub fn view(&self, state: &AppState, id: &str, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Driver ");
        frame.render_widget(Paragraph::new(Self::lines(state, id)).block(block), area);
    }
}

impl Default for DriverDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{loaded_state, sample_drivers};

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_known_driver() {
        let state = loaded_state(sample_drivers());
        let text = text(&DriverDetailComponent::lines(&state, "d-1"));

        assert!(text.contains("/admin/driver/d-1"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("ada@fleet.io"));
        assert!(text.contains("Has Vehicle"));
    }

    #[test]
    fn test_unknown_driver() {
        let state = loaded_state(sample_drivers());
        let text = text(&DriverDetailComponent::lines(&state, "nope"));

        assert!(text.contains("/admin/driver/nope"));
        assert!(text.contains("Driver not found"));
    }
}
