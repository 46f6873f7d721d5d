//! Status bar: connection state, last notice, and counters

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hbchat_app::{AppState, ConnectionStatus, NoticeLevel};

use crate::theme::palette;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn connection_span(&self) -> Span<'a> {
        match self.state.connection {
            ConnectionStatus::Connected => Span::styled(
                format!("● {}", self.state.server_label),
                Style::default().fg(palette::STATUS_GREEN),
            ),
            ConnectionStatus::Closed => Span::styled(
                format!("○ {} (closed)", self.state.server_label),
                Style::default().fg(palette::STATUS_RED),
            ),
        }
    }

    fn notice_span(&self) -> Option<Span<'a>> {
        let notice = self.state.notice.as_ref()?;
        let color = match notice.level {
            NoticeLevel::Info => palette::TEXT_SECONDARY,
            NoticeLevel::Warn => palette::STATUS_YELLOW,
            NoticeLevel::Error => palette::STATUS_RED,
        };
        Some(Span::styled(
            format!("[{}] {}", notice.at.format("%H:%M:%S"), notice.text),
            Style::default().fg(color),
        ))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" │ ", Style::default().fg(palette::BORDER_DIM));
        let mut spans = vec![self.connection_span(), separator.clone()];

        spans.push(Span::styled(
            format!(
                "sent {} · recv {}",
                self.state.messages_sent, self.state.chunks_received
            ),
            Style::default().fg(palette::TEXT_SECONDARY),
        ));

        if let Some(notice) = self.notice_span() {
            spans.push(separator);
            spans.push(notice);
        } else {
            spans.push(separator);
            spans.push(Span::styled(
                "u username · m message · ↑↓ scroll · q quit",
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
