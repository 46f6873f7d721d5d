//! Input Session handlers: username and message entry

use hbchat_core::format_outgoing;
use hbchat_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, NoticeLevel};
use crate::text_entry::EntryPurpose;

use super::{UpdateAction, UpdateResult};

pub fn handle_open_username(state: &mut AppState) -> UpdateResult {
    if state.is_modal() {
        return UpdateResult::none();
    }
    state.open_entry(EntryPurpose::Username);
    UpdateResult::none()
}

pub fn handle_open_compose(state: &mut AppState) -> UpdateResult {
    if state.is_modal() {
        return UpdateResult::none();
    }

    if state.require_username && !state.has_username() {
        state.pending_compose = true;
        state.set_notice(NoticeLevel::Info, "Choose a username first");
        state.open_entry(EntryPurpose::Username);
        return UpdateResult::none();
    }

    state.open_entry(EntryPurpose::Message);
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, ch: char) -> UpdateResult {
    if let Some(entry) = state.entry.as_mut() {
        entry.insert(ch);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(entry) = state.entry.as_mut() {
        entry.backspace();
    }
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    if let Some(entry) = state.entry.as_mut() {
        entry.clear();
    }
    UpdateResult::none()
}

pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    let Some(entry) = state.entry.as_mut() else {
        return UpdateResult::none();
    };
    let purpose = entry.purpose;

    let text = match entry.confirm() {
        Ok(text) => text,
        Err(e) => {
            debug!("{:?} entry refused: {}", purpose, e);
            return UpdateResult::none();
        }
    };
    state.close_entry();

    match purpose {
        EntryPurpose::Username => {
            info!("Username set to {:?}", text);
            state.username = text;
            if std::mem::take(&mut state.pending_compose) {
                return UpdateResult::message(Message::OpenCompose);
            }
            UpdateResult::none()
        }
        EntryPurpose::Message => {
            let outgoing = format_outgoing(&state.username, &text);
            if outgoing.truncated {
                warn!(
                    "Outgoing message cut to {} bytes",
                    outgoing.as_bytes().len()
                );
            }
            UpdateResult::action(UpdateAction::Send(outgoing))
        }
    }
}

pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    if let Some(entry) = &state.entry {
        debug!("{:?} entry cancelled", entry.purpose);
    }
    state.close_entry();
    state.pending_compose = false;
    UpdateResult::none()
}
