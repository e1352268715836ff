use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState, infrastructure::tui, presentation::components::Components,
};

/// Draws a state snapshot onto whichever terminal the runner owns
#[derive(Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::TestTui;
    use crate::test_helpers::{loaded_state, sample_drivers};

    #[tokio::test]
    async fn test_renderer_draws_on_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(120, 20)?));
        let shared = Arc::clone(&test_tui);
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = shared;
        let mut renderer = Renderer::new();

        renderer.render(&tui, &loaded_state(sample_drivers())).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen_text().contains("Carol Jones"));
        Ok(())
    }
}
