use ratatui::{prelude::*, widgets::Gauge};

use crate::{core::state::AppState, presentation::widgets::popup::centered_rect};

/// Progress gauge shown until both the fetch and the simulator are done
pub struct LoadingComponent;

impl LoadingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn label(state: &AppState) -> String {
        format!("Loading drivers... {}%", state.loading.progress().value())
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let progress = state.loading.progress();
        let gauge = Gauge::default()
            .gauge_style(state.config.styles.style("gauge"))
            .ratio(progress.ratio().clamp(0.0, 1.0))
            .label(Self::label(state));
        frame.render_widget(gauge, centered_rect(50, 1, area));
    }
}

impl Default for LoadingComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::{loading::LoadingMsg, nav::NavMsg, Msg};
    use crate::core::update::update;
    use crate::infrastructure::tui::test::buffer_text;
    use crate::test_helpers::default_state;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_label_follows_progress() {
        let (mut state, _) = update(Msg::Nav(NavMsg::ShowDrivers), default_state());
        assert_eq!(LoadingComponent::label(&state), "Loading drivers... 0%");

        let generation = state.loading.generation();
        for _ in 0..3 {
            (state, _) = update(Msg::Loading(LoadingMsg::ProgressTick { generation }), state);
        }
        assert_eq!(LoadingComponent::label(&state), "Loading drivers... 30%");
    }

    #[test]
    fn test_gauge_is_drawn() -> color_eyre::Result<()> {
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), default_state());
        let mut terminal = Terminal::new(TestBackend::new(60, 5))?;
        terminal.draw(|frame| LoadingComponent::new().view(&state, frame, frame.area()))?;

        assert!(buffer_text(terminal.backend().buffer()).contains("Loading drivers... 0%"));
        Ok(())
    }
}
