use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::text::format_count;

/// Figures shown on the first status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext<'a> {
    pub total: usize,
    pub matching: usize,
    pub selected: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub session: &'a str,
}

pub struct StatusBarWidget<'a> {
    ctx: ViewContext<'a>,
    message: Option<&'a str>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>, message: Option<&'a str>) -> Self {
        Self {
            ctx,
            message,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn summary(&self) -> String {
        let ctx = &self.ctx;
        let count = if ctx.matching == ctx.total {
            format!("{} drivers", format_count(ctx.total))
        } else {
            format!(
                "{} of {} drivers",
                format_count(ctx.matching),
                format_count(ctx.total)
            )
        };
        format!(
            "{count} | {} selected | page {}/{} | {}",
            format_count(ctx.selected),
            ctx.page_index + 1,
            ctx.page_count,
            ctx.session
        )
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);

        Paragraph::new(Span::styled(self.summary(), self.style.italic()))
            .render(layout[1], buf);
        Paragraph::new(self.message.unwrap_or_default()).render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::buffer_text;
    use pretty_assertions::assert_eq;

    fn ctx(total: usize, matching: usize) -> ViewContext<'static> {
        ViewContext {
            total,
            matching,
            selected: 2,
            page_index: 0,
            page_count: 3,
            session: "signed in",
        }
    }

    #[test]
    fn test_summary_unfiltered() {
        let widget = StatusBarWidget::new(ctx(1234, 1234), None);
        assert_eq!(
            widget.summary(),
            "1,234 drivers | 2 selected | page 1/3 | signed in"
        );
    }

    #[test]
    fn test_summary_filtered() {
        let widget = StatusBarWidget::new(ctx(20, 4), None);
        assert!(widget.summary().starts_with("4 of 20 drivers"));
    }

    #[test]
    fn test_render_message_line() {
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(ctx(5, 5), Some("Driver created")).render(area, &mut buf);

        let text = buffer_text(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("5 drivers"));
        assert!(lines[1].starts_with("Driver created"));
    }
}
