//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use hbchat_app::{InputKey, Message};
use hbchat_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

fn event_to_message(event: Event) -> Option<Message> {
    match event {
        // Repeats count as presses so a held scroll key keeps scrolling
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            key_event_to_input(key).map(Message::Key)
        }
        _ => None,
    }
}

/// Collect every key pressed since the last frame without blocking
pub fn drain() -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(msg) = event_to_message(event::read()?) {
            messages.push(msg);
        }
    }
    Ok(messages)
}
