//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use hbchat_app::AppState;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{EntryModal, Header, StatusBar, TranscriptView};

/// Render the complete UI (View function in TEA)
///
/// Only the transcript view state is touched: its visible height and the
/// projection width follow the terminal size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::BACKGROUND)),
        area,
    );

    let areas = layout::create(area);
    let inner = TranscriptView::inner(areas.transcript);
    state.view.visible_rows = inner.height as usize;
    state
        .view
        .ensure_projected(&state.transcript, inner.width as usize);

    frame.render_widget(Header::new(&state.username), areas.header);
    frame.render_widget(
        TranscriptView::new(state.view.visible()).focused(!state.is_modal()),
        areas.transcript,
    );
    frame.render_widget(StatusBar::new(state), areas.status);

    if let Some(entry) = &state.entry {
        frame.render_widget(EntryModal::new(entry), area);
    }
}
