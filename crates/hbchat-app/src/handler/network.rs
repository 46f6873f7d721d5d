//! Network event handlers

use hbchat_core::prelude::*;

use crate::state::{AppState, ConnectionStatus, NoticeLevel};

use super::UpdateResult;

/// Append one chunk of server data and keep the latest rows in view
pub fn handle_inbound(state: &mut AppState, bytes: &[u8]) -> UpdateResult {
    state.chunks_received += 1;

    match state.transcript.append_bytes(bytes) {
        Ok(outcome) if outcome.deferred => {
            trace!("Holding a partial character until the next chunk");
        }
        Ok(outcome) => {
            if outcome.grew {
                info!(
                    "Transcript capacity grown to {} bytes",
                    state.transcript.capacity()
                );
            }
            if outcome.dropped_bytes > 0 {
                debug!("Dropped {} bytes of old history", outcome.dropped_bytes);
            }
            state.view.reproject(&state.transcript);
            state.view.follow_append();
        }
        Err(e) => {
            warn!("Discarding {} inbound bytes: {}", bytes.len(), e);
            state.set_notice(NoticeLevel::Warn, e.to_string());
        }
    }

    UpdateResult::none()
}

pub fn handle_peer_closed(state: &mut AppState) -> UpdateResult {
    if state.connection == ConnectionStatus::Closed {
        return UpdateResult::none();
    }

    state.connection = ConnectionStatus::Closed;
    state.set_notice(NoticeLevel::Error, "Server closed the connection");

    if state.quit_on_disconnect {
        info!("Quitting after server disconnect");
        state.request_quit();
    }
    UpdateResult::none()
}

pub fn handle_receive_failed(state: &mut AppState, reason: String) -> UpdateResult {
    warn!("Receive failed: {}", reason);
    state.set_notice(NoticeLevel::Warn, format!("Receive failed: {}", reason));
    UpdateResult::none()
}

pub fn handle_sent(state: &mut AppState, bytes: usize) -> UpdateResult {
    state.messages_sent += 1;
    debug!("Message sent ({} bytes)", bytes);
    state.set_notice(NoticeLevel::Info, "Message sent!");
    UpdateResult::none()
}

pub fn handle_send_failed(state: &mut AppState, reason: String) -> UpdateResult {
    warn!("Send failed: {}", reason);
    state.set_notice(NoticeLevel::Warn, format!("Send failed: {}", reason));
    UpdateResult::none()
}
