//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use hbchat_core::prelude::*;
use hbchat_core::TranscriptBuffer;

use crate::config::Settings;
use crate::text_entry::{EntryPurpose, TextEntryState};
use crate::view_state::TranscriptViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Transcript view; scroll and trigger keys are live
    #[default]
    Normal,
    /// A text entry modal is open; network polling is suspended
    Entry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    /// The server closed its side
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// One-line message for the status bar
#[derive(Debug, Clone)]
pub struct StatusNotice {
    pub level: NoticeLevel,
    pub text: String,
    pub at: DateTime<Local>,
}

impl StatusNotice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            at: Local::now(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    pub transcript: TranscriptBuffer,
    pub view: TranscriptViewState,

    /// Empty until the user enters one
    pub username: String,
    pub entry: Option<TextEntryState>,
    /// Open the compose entry once the username entry is confirmed
    pub pending_compose: bool,

    pub connection: ConnectionStatus,
    pub server_label: String,
    pub notice: Option<StatusNotice>,

    pub messages_sent: u64,
    pub chunks_received: u64,

    pub require_username: bool,
    pub quit_on_disconnect: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self> {
        let transcript = TranscriptBuffer::with_policy(
            &settings.transcript.seed,
            settings.transcript.tiers(),
            settings.transcript.overflow.into(),
        )?;

        Ok(Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            transcript,
            view: TranscriptViewState::new(settings.scroll),
            username: String::new(),
            entry: None,
            pending_compose: false,
            connection: ConnectionStatus::Connected,
            server_label: settings.server.label(),
            notice: None,
            messages_sent: 0,
            chunks_received: 0,
            require_username: settings.behavior.require_username,
            quit_on_disconnect: settings.behavior.quit_on_disconnect,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// True while a modal entry suspends normal frame work
    pub fn is_modal(&self) -> bool {
        self.ui_mode == UiMode::Entry
    }

    pub fn has_username(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn open_entry(&mut self, purpose: EntryPurpose) {
        debug!("Opening {:?} entry", purpose);
        self.entry = Some(TextEntryState::new(purpose));
        self.ui_mode = UiMode::Entry;
    }

    pub fn close_entry(&mut self) {
        self.entry = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn set_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(StatusNotice::new(level, text));
    }
}
