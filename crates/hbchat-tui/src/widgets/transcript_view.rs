//! Transcript widget: the projected rows at the current scroll offset

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use hbchat_app::VisibleWindow;

use crate::theme::palette;

pub struct TranscriptView<'a> {
    window: VisibleWindow<'a>,
    /// Dim the border while a modal owns the keyboard
    focused: bool,
}

impl<'a> TranscriptView<'a> {
    pub fn new(window: VisibleWindow<'a>) -> Self {
        Self {
            window,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL).title(" chat ")
    }

    /// Area left for rows inside the border
    pub fn inner(area: Rect) -> Rect {
        Self::block().inner(area)
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        };
        let block = Self::block().border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
        lines.extend((0..self.window.leading_blank).map(|_| Line::default()));
        lines.extend(self.window.rows.iter().map(|row| Line::raw(row.as_str())));

        Paragraph::new(lines)
            .style(Style::default().fg(palette::TEXT_PRIMARY))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_rows_inside_border() {
        let rows = vec!["-chat-".to_string(), "hello".to_string()];
        let window = VisibleWindow {
            leading_blank: 0,
            rows: &rows,
        };

        let mut term = TestTerminal::new();
        term.render_widget(TranscriptView::new(window), Rect::new(0, 0, 40, 6));

        assert!(term.line_contains(0, "chat"));
        assert!(term.line_contains(1, "-chat-"));
        assert!(term.line_contains(2, "hello"));
    }

    #[test]
    fn test_leading_blank_rows_push_content_down() {
        let rows = vec!["hello".to_string()];
        let window = VisibleWindow {
            leading_blank: 2,
            rows: &rows,
        };

        let mut term = TestTerminal::new();
        term.render_widget(TranscriptView::new(window), Rect::new(0, 0, 40, 6));

        assert!(!term.line_contains(1, "hello"));
        assert!(term.line_contains(3, "hello"));
    }

    #[test]
    fn test_inner_excludes_border() {
        let inner = TranscriptView::inner(Rect::new(0, 0, 40, 10));
        assert_eq!(inner, Rect::new(1, 1, 38, 8));
    }
}
