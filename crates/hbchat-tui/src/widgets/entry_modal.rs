//! Text entry popup shown while the loop is in its modal sub-state

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use hbchat_app::TextEntryState;

use crate::theme::palette;

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 6;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Keep the end of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

pub struct EntryModal<'a> {
    entry: &'a TextEntryState,
}

impl<'a> EntryModal<'a> {
    pub fn new(entry: &'a TextEntryState) -> Self {
        Self { entry }
    }
}

impl Widget for EntryModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(popup, buf);

        let title = format!(" {} ", self.entry.purpose.title());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(palette::BORDER_ACTIVE))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(popup);
        block.render(popup, buf);

        // One column for the cursor
        let room = (inner.width as usize).saturating_sub(1);
        let input = Line::from(vec![
            Span::styled(
                visible_tail(self.entry.text(), room),
                Style::default().fg(palette::TEXT_BRIGHT),
            ),
            Span::styled(
                "_",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);

        let counter = Line::from(Span::styled(
            format!(
                "{}/{}",
                self.entry.char_count(),
                self.entry.constraints.max_chars
            ),
            Style::default().fg(palette::TEXT_SECONDARY),
        ));

        let footer = match &self.entry.error {
            Some(err) => Line::from(Span::styled(
                err.as_str(),
                Style::default().fg(palette::STATUS_RED),
            )),
            None => Line::from(Span::styled(
                "Enter confirm · Esc cancel · Ctrl+U clear",
                Style::default().fg(palette::TEXT_SECONDARY),
            )),
        };

        Paragraph::new(vec![input, counter, footer]).render(inner, buf);
    }
}
