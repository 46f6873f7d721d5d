//! Header widget: static title and the "Username: X" line

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::palette;

pub const TITLE: &str = "hbchat";

pub struct Header<'a> {
    username: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(username: &'a str) -> Self {
        Self { username }
    }

    fn username_line(&self) -> Line<'a> {
        let label = Span::styled("Username: ", Style::default().fg(palette::TEXT_SECONDARY));
        if self.username.is_empty() {
            Line::from(vec![
                label,
                Span::styled(
                    "(press u to set)",
                    Style::default()
                        .fg(palette::TEXT_SECONDARY)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
        } else {
            Line::from(vec![
                label,
                Span::styled(self.username, Style::default().fg(palette::TEXT_BRIGHT)),
            ])
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);

        let lines = vec![title, self.username_line()];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_username() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 4);
        term.render_widget(Header::new("alice"), area);

        assert!(term.line_contains(1, "hbchat"));
        assert!(term.line_contains(2, "Username: alice"));
    }

    #[test]
    fn test_header_hints_when_username_unset() {
        let mut term = TestTerminal::new();
        term.render_widget(Header::new(""), Rect::new(0, 0, 80, 4));
        assert!(term.buffer_contains("press u to set"));
    }
}
