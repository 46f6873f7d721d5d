//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{entry, keys::handle_key, network, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input Session
        // ─────────────────────────────────────────────────────────
        Message::OpenUsernameEntry => entry::handle_open_username(state),
        Message::OpenCompose => entry::handle_open_compose(state),
        Message::EntryInput(ch) => entry::handle_input(state, ch),
        Message::EntryBackspace => entry::handle_backspace(state),
        Message::EntryClear => entry::handle_clear(state),
        Message::EntryConfirm => entry::handle_confirm(state),
        Message::EntryCancel => entry::handle_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToLatest => scroll::handle_scroll_to_latest(state),

        // ─────────────────────────────────────────────────────────
        // Network Messages
        // ─────────────────────────────────────────────────────────
        Message::Inbound(bytes) => network::handle_inbound(state, &bytes),
        Message::PeerClosed => network::handle_peer_closed(state),
        Message::ReceiveFailed { reason } => network::handle_receive_failed(state, reason),
        Message::Sent { bytes } => network::handle_sent(state, bytes),
        Message::SendFailed { reason } => network::handle_send_failed(state, reason),
    }
}
