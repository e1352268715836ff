use ratatui::{prelude::*, widgets::Paragraph};

/// "Previous" / "Next" controls with the page position between them.
/// A control is drawn with `disabled` when that move is impossible.
pub struct PagerWidget {
    page_index: usize,
    page_count: usize,
    can_previous: bool,
    can_next: bool,
    disabled: Style,
}

impl PagerWidget {
    pub fn new(page_index: usize, page_count: usize) -> Self {
        Self {
            page_index,
            page_count,
            can_previous: page_index > 0,
            can_next: page_index + 1 < page_count,
            disabled: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled = style;
        self
    }

    fn control(&self, label: &'static str, enabled: bool) -> Span<'static> {
        if enabled {
            Span::raw(label)
        } else {
            Span::styled(label, self.disabled)
        }
    }

    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            self.control("‹ Previous", self.can_previous),
            Span::raw(format!("  Page {} of {}  ", self.page_index + 1, self.page_count)),
            self.control("Next ›", self.can_next),
        ])
    }
}

impl Widget for PagerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
