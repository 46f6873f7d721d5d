//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::Entry => handle_key_entry(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Triggers
        InputKey::Char('u') => Some(Message::OpenUsernameEntry),
        InputKey::Char('m' | 'c') | InputKey::Enter => Some(Message::OpenCompose),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToLatest),

        _ => None,
    }
}

fn handle_key_entry(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::EntryConfirm),
        InputKey::Esc => Some(Message::EntryCancel),
        InputKey::Backspace => Some(Message::EntryBackspace),
        InputKey::CharCtrl('u') => Some(Message::EntryClear),
        InputKey::Char(c) => Some(Message::EntryInput(c)),
        _ => None,
    }
}
